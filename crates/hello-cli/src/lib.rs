//! CLI layer for the template: terminal output, logging setup, error
//! mapping, and the assertion-and-tally harness shared by both binaries.
//!
//! The `hello` binary runs the fixed demonstration sequence; the
//! `hello-tests` binary runs the self test. Both build on the modules here.

pub mod error;
pub mod harness;
pub mod logging;
pub mod output;
