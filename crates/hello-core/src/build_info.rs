//! Build-info reporter.
//!
//! # Design
//!
//! Other renditions of this template select the build-mode text with
//! preprocessor conditionals. Here the same facts are captured once by
//! `build.rs` and arrive as plain `option_env!` constants, so the reporter
//! is an ordinary pure function over fixed inputs: constant for a given
//! build, whether computed once or on every call.
//!
//! Every combination of captured values maps to a defined string. A missing
//! profile degrades to [`BuildMode::Standard`]; a missing compiler identity
//! degrades to the "Unknown compiler" line.

use std::fmt;

/// Language-standard marker reported on the last line.
///
/// Kept in sync with `edition` in the workspace manifest.
pub const EDITION: &str = "2024";

// ── BuildMode ─────────────────────────────────────────────────────────────────

/// Which Cargo profile produced this binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Debug,
    Release,
    /// Fallback when the profile was neither `debug` nor `release`.
    Standard,
}

impl BuildMode {
    /// Map a captured Cargo `PROFILE` value to a mode. Anything unrecognised,
    /// including a missing capture, degrades to [`BuildMode::Standard`].
    pub fn from_profile(profile: Option<&str>) -> Self {
        match profile {
            Some("debug") => Self::Debug,
            Some("release") => Self::Release,
            _ => Self::Standard,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
            Self::Standard => "standard",
        }
    }

    /// Human-facing label used in the report. The three labels are mutually
    /// exclusive substrings, so a report contains exactly one of them.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Debug => "\u{1f527} Running DEBUG build (dev mode)",
            Self::Release => "\u{1f680} Running RELEASE build (optimized)",
            Self::Standard => "\u{1f4e6} Standard build",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Compiler ──────────────────────────────────────────────────────────────────

/// Compiler identity captured at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compiler {
    /// Toolchain family, e.g. `rustc`.
    pub family: &'static str,
    pub major: &'static str,
    pub minor: &'static str,
}

// ── BuildInfo ─────────────────────────────────────────────────────────────────

/// The full build descriptor: mode, compiler identity, language edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub mode: BuildMode,
    /// `None` when `build.rs` could not determine the compiler.
    pub compiler: Option<Compiler>,
    pub edition: &'static str,
}

impl BuildInfo {
    /// The descriptor for the running binary, assembled from the constants
    /// `build.rs` captured.
    pub fn current() -> Self {
        let compiler = match (
            option_env!("HELLO_RUSTC_FAMILY"),
            option_env!("HELLO_RUSTC_MAJOR"),
            option_env!("HELLO_RUSTC_MINOR"),
        ) {
            (Some(family), Some(major), Some(minor)) => Some(Compiler {
                family,
                major,
                minor,
            }),
            _ => None,
        };

        Self {
            mode: BuildMode::from_profile(option_env!("HELLO_BUILD_PROFILE")),
            compiler,
            edition: EDITION,
        }
    }
}

impl fmt::Display for BuildInfo {
    /// Three lines: mode label, compiler line, edition marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mode.label())?;
        match &self.compiler {
            Some(c) => writeln!(f, "Compiler: {} {}.{}", c.family, c.major, c.minor)?,
            None => writeln!(f, "Compiler: Unknown compiler")?,
        }
        write!(f, "Rust edition {}", self.edition)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
