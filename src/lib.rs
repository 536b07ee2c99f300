//! fitsch library crate.

pub mod app;
pub mod catalogue;
pub mod config;
pub mod domain;
#[cfg(feature = "harness")]
pub mod fixtures;
#[cfg(feature = "harness")]
pub mod harness;
pub mod search;
pub mod ui;
