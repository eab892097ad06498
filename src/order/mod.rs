//! # Natural comparison
//!
//! The lock-step walk over two strings, and the four public entry points
//! built from it. Both cursors move strictly forward and every round of the
//! walk consumes at least one unit from each side, so a comparison costs time
//! linear in the shorter input (plus one unit on a mismatch).
use std::cmp::Ordering;
use std::convert::identity;

use crate::scan;
use crate::scan::Token;
use crate::unit::Unit;

/// Value type numeric tokens parse into, the `long` analogue.
type Long = i64;

/// Compare two byte strings in natural order, case-sensitively.
///
/// Runs of decimal digits (with optional front-padding and sign, see the
/// crate documentation) compare by numeric value, all other characters by
/// byte value.
///
/// # Arguments
///
/// * `s1`, `s2`: Anything viewable as bytes; borrowed slices and owned
/// strings alike.
///
/// # Return value
///
/// `Less`, `Equal` or `Greater` as `s1` sorts before, with or after `s2`.
pub fn compare(s1: impl AsRef<[u8]>, s2: impl AsRef<[u8]>) -> Ordering {
    walk(s1.as_ref().iter().copied(), s2.as_ref().iter().copied(), identity)
}

/// Compare two byte strings in natural order, ignoring ascii case.
///
/// Same ordering as [`compare`], except that characters outside numeric
/// tokens are folded with the ascii table before being differenced.
pub fn compare_ignore_case(s1: impl AsRef<[u8]>, s2: impl AsRef<[u8]>) -> Ordering {
    walk(s1.as_ref().iter().copied(), s2.as_ref().iter().copied(), Unit::fold)
}

/// Compare two strings by unicode scalar in natural order, case-sensitively.
///
/// The wide counterpart of [`compare`]: the inputs are walked as `char`s, so
/// multi-byte scalars compare as single characters by scalar value.
pub fn compare_wide(s1: impl AsRef<str>, s2: impl AsRef<str>) -> Ordering {
    walk(s1.as_ref().chars(), s2.as_ref().chars(), identity)
}

/// Compare two strings by unicode scalar in natural order, ignoring case.
///
/// Same ordering as [`compare_wide`], except that characters outside numeric
/// tokens are lowered with the unicode one-to-one mappings before being
/// differenced.
pub fn compare_ignore_case_wide(s1: impl AsRef<str>, s2: impl AsRef<str>) -> Ordering {
    walk(s1.as_ref().chars(), s2.as_ref().chars(), Unit::fold)
}

/// Walk both cursors in lock-step.
///
/// At every position each side is scanned for a leading integer first; which
/// sides have one decides the round:
///
/// * neither: the current characters are transformed and differenced, equal
///   characters advance both cursors by one;
/// * both: values decide, then spans (wider front-padding sorts first), then
///   both cursors jump past their token;
/// * one: the side with the number sorts first, whatever the other side's
///   character is.
///
/// The walk ends when either side runs out; a side with units left over is
/// the greater one.
fn walk<U, I, F>(mut s1: I, mut s2: I, transform: F) -> Ordering
where
    U: Unit,
    I: Iterator<Item = U> + Clone,
    F: Fn(U) -> U,
{
    loop {
        let (c1, c2) = match (s1.clone().next(), s2.clone().next()) {
            (Some(c1), Some(c2)) => (c1, c2),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        };

        let t1: Token<Long> = scan::leading(s1.clone());
        let t2: Token<Long> = scan::leading(s2.clone());

        match (t1.is_present(), t2.is_present()) {
            (false, false) => {
                match transform(c1).code().cmp(&transform(c2).code()) {
                    Ordering::Equal => {},
                    decided => return decided,
                }
                s1.next();
                s2.next();
            },
            (true, true) => {
                match t1.value.cmp(&t2.value) {
                    Ordering::Equal => {},
                    decided => return decided,
                }
                // Same value, possibly different front-padding; the wider
                // token is the smaller side.
                match t2.width.cmp(&t1.width) {
                    Ordering::Equal => {},
                    decided => return decided,
                }
                s1.nth(t1.width - 1);
                s2.nth(t2.width - 1);
            },
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
        }
    }
}
