//! Console reporting for hand-driven test suites.
//!
//! A [`TestReporter`] is created per suite with a declared number of tests.
//! The driver runs each test itself and hands the observed [`Outcome`] to the
//! reporter, which prints progress and keeps the pass/fail tally.

mod config;
mod diff;
mod outcome;
mod reporter;
mod style;

pub use config::{ConfigError, ReporterConfig};
pub use outcome::Outcome;
pub use reporter::{Summary, TestReporter};
