//! Test utilities
//!
//! Manual mock implementations of the domain ports and test fixtures.
//! The mocks count their calls so tests can assert that validation
//! failures never reach an outbound lookup.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
