//! Hello Core - library layer of the Rust console-application template.
//!
//! This crate holds the three functions the template demonstrates, kept free
//! of terminal concerns so they stay trivially testable:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        hello-cli (binaries)             │
//! │   demo entry point + self-test runner   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        hello-core (pure logic)          │
//! │   greeting │ counter │ build_info       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! - [`greeting`] builds the personalised greeting string.
//! - [`counter`] writes the counting demonstration to any `io::Write`.
//! - [`build_info`] reports the build mode and compiler identity captured
//!   at build time by `build.rs`.
//!
//! The crate emits `tracing` events but never installs a subscriber; that is
//! the binaries' job.

pub mod build_info;
pub mod counter;
pub mod greeting;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::build_info::{BuildInfo, BuildMode, Compiler};
    pub use crate::counter::{DEFAULT_COUNT, print_count, write_count};
    pub use crate::greeting::{DEFAULT_NAME, greeting};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
