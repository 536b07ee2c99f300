//! Search helpers.

pub mod fuzzy;
