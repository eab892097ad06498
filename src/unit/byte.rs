//! # Narrow unit
//!
//! Bytes, compared by byte value and folded with the ascii table.
use crate::unit::{Sign, Unit};

impl Unit for u8 {
    fn code(self) -> u32 {
        self.into()
    }

    fn is_space(self) -> bool {
        // The C white space set: space, tab, newline, vertical tab, form
        // feed, carriage return.
        matches!(self, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
    }

    fn digit(self) -> Option<u8> {
        if self.is_ascii_digit() {
            Some(self - b'0')
        } else {
            None
        }
    }

    fn sign(self) -> Option<Sign> {
        match self {
            b'+' => Some(Sign::Positive),
            b'-' => Some(Sign::Negative),
            _ => None,
        }
    }

    fn fold(self) -> Self {
        self.to_ascii_lowercase()
    }
}
