//! # Wide unit
//!
//! Unicode scalars, compared by scalar value. The fold is the full unicode
//! lowering restricted to the one-to-one mappings: a scalar whose lowercase
//! form expands to multiple scalars is left untouched, as expansion would be
//! normalization rather than folding.
use crate::unit::{Sign, Unit};

impl Unit for char {
    fn code(self) -> u32 {
        self as u32
    }

    fn is_space(self) -> bool {
        self.is_whitespace()
    }

    fn digit(self) -> Option<u8> {
        // Base 10 restricts this to the ascii digits, same as the narrow
        // unit; other unicode digit characters are ordinary characters.
        self.to_digit(10).map(|digit| digit as u8)
    }

    fn sign(self) -> Option<Sign> {
        match self {
            '+' => Some(Sign::Positive),
            '-' => Some(Sign::Negative),
            _ => None,
        }
    }

    fn fold(self) -> Self {
        let mut lowered = self.to_lowercase();
        match (lowered.next(), lowered.next()) {
            (Some(low), None) => low,
            _ => self,
        }
    }
}
