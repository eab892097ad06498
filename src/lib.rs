//! # Natural order
//!
//! "Natural", alphanumeric, human ordering of strings: runs of decimal digits
//! compare by their numeric value, everything else compares by character
//! code. `z9` sorts before `z10`, `hallow-10` before `hallow-1`, and a
//! numeric token beats whatever character sits in its place on the other
//! side.
//!
//! The digit runs are read the way the C runtime reads a `long` in base 10:
//! leading white space is skipped, one `+` or `-` is accepted, and the value
//! clamps at the fixed-width extremes. Everything consumed that way is the
//! token's span; when two tokens carry the same value, the one with the wider
//! span (more zero- or space-padding in front) sorts first, and only then do
//! the cursors move on.
//!
//! Four variants of one walk:
//!
//! * [`compare`]: bytes, case-sensitive
//! * [`compare_ignore_case`]: bytes, folded with the ascii table
//! * [`compare_wide`]: unicode scalars, case-sensitive
//! * [`compare_ignore_case_wide`]: unicode scalars, folded with the unicode
//!   one-to-one lowerings
//!
//! All four are total over their inputs, allocation-free, side-effect free
//! and reentrant, and return a [`std::cmp::Ordering`] directly usable with
//! `sort_by` and friends:
//!
//! ```
//! use natural_order::compare;
//!
//! let mut files = vec!["page10.txt", "page2.txt", "page1.txt"];
//! files.sort_by(|a, b| compare(a, b));
//! assert_eq!(files, vec!["page1.txt", "page2.txt", "page10.txt"]);
//! ```
pub use order::compare;
pub use order::compare_ignore_case;
pub use order::compare_ignore_case_wide;
pub use order::compare_wide;

pub mod order;
pub mod scan;
pub mod unit;
