//! Testing utilities for infrastructure unit tests.
//!
//! Provides a fixed Toronto snapshot and the report derived from it.

mod test_fixtures;

pub use test_fixtures::{sample_location, sample_report, sample_snapshot};
