//! # Leading integer scan
//!
//! Replicates the C runtime convention for reading a `long` in base 10 from
//! the front of a string: leading white space is skipped, one optional `+` or
//! `-` is accepted, decimal digits are consumed, and the value clamps at the
//! extremes of the accumulator when the digits outgrow it. When no digit is
//! found the conversion does not happen at all and the cursor is reported as
//! not having moved, no matter how much white space or sign was looked at.
//!
//! That last rule gives the presence test its exact shape: a side of the
//! comparison "has a number" iff the scanned value is nonzero or the cursor
//! moved. The test can not be simplified to "the next character is a digit",
//! because a token like `" 21"` moves the cursor through the white space it
//! skipped and that span counts as front-padding.
use num::{Bounded, CheckedAdd, CheckedMul, CheckedSub, FromPrimitive, Zero};

use crate::unit::{Sign, Unit};

/// Result of scanning for a leading integer.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Token<N> {
    /// Parsed value, clamped to the extremes of `N` when the digits exceed
    /// its range.
    pub value: N,
    /// Number of units consumed: white space, sign and digits when at least
    /// one digit followed, zero otherwise.
    pub width: usize,
}

impl<N: Zero> Token<N> {
    /// Whether a number was found at the scanned position.
    ///
    /// This is the moved-cursor-or-nonzero-value test.
    pub fn is_present(&self) -> bool {
        !self.value.is_zero() || self.width != 0
    }
}

/// Scan a leading integer in base 10.
///
/// # Arguments
///
/// * `units`: Cursor to scan from. The caller keeps its own cursor; this
/// function consumes a private copy and only reports how far it got.
///
/// # Return value
///
/// The parsed value together with the consumed span.
pub fn leading<U, N, I>(units: I) -> Token<N>
where
    U: Unit,
    N: Zero + Bounded + FromPrimitive + CheckedAdd + CheckedSub + CheckedMul,
    I: Iterator<Item = U>,
{
    let mut units = units.peekable();

    let mut padding = 0;
    while units.peek().map_or(false, |&unit| unit.is_space()) {
        units.next();
        padding += 1;
    }

    let sign = match units.peek().and_then(|&unit| unit.sign()) {
        Some(sign) => {
            units.next();
            padding += 1;
            sign
        },
        None => Sign::Positive,
    };

    let radix = from_digit::<N>(10);
    let mut value = N::zero();
    let mut digits = 0;
    let mut clamped = false;
    while let Some(digit) = units.peek().and_then(|&unit| unit.digit()) {
        units.next();
        digits += 1;

        if clamped {
            // The span keeps growing, the value no longer moves.
            continue;
        }
        let next = value.checked_mul(&radix).and_then(|shifted| match sign {
            // Accumulating in the sign's direction lets the most negative
            // value of `N` parse exactly.
            Sign::Positive => shifted.checked_add(&from_digit(digit)),
            Sign::Negative => shifted.checked_sub(&from_digit(digit)),
        });
        value = match next {
            Some(next) => next,
            None => {
                clamped = true;
                match sign {
                    Sign::Positive => N::max_value(),
                    Sign::Negative => N::min_value(),
                }
            },
        };
    }

    if digits == 0 {
        Token { value: N::zero(), width: 0 }
    } else {
        Token { value, width: padding + digits }
    }
}

fn from_digit<N: FromPrimitive>(digit: u8) -> N {
    match N::from_u8(digit) {
        Some(value) => value,
        None => unreachable!("\
            Accumulators are at least as wide as the radix, which any decimal \
            digit is smaller than.\
        "),
    }
}
