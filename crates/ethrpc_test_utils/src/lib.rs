//! Fixtures and builders shared by the tests of the workspace crates.

pub mod env;
pub mod fixtures;
pub mod sample;
