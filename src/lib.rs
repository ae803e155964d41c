//! Parsing of liturgical Bible reading references such as
//!
//! ```text
//! Ис., XL, 8 – XLII, 5.
//! ```
//!
//! into chapter and line predicates suitable for building range queries.

#[macro_use]
mod regex;

pub mod language;
pub mod parsing;
