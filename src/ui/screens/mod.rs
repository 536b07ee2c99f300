//! Route renderers.

pub mod home;
pub mod results;
