//! Test support utilities.
//!
//! Enabled for unit tests and, via the `testkit` feature, for integration
//! tests. Not part of the public API surface.

pub mod domain;
pub mod request;
