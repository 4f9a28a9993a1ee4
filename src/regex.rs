//! Selects the regex engine at compile time.
//!
//! The full `regex` crate is used by default; the `lite` feature swaps in
//! `regex-lite` for smaller binaries. The patterns in this crate only use
//! syntax both engines understand.

#[cfg(feature = "regex")]
pub(crate) use ::regex::Regex;

#[cfg(all(feature = "lite", not(feature = "regex")))]
pub(crate) use ::regex_lite::Regex;
