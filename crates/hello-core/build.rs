//! Build-time toolchain capture.
//!
//! The build-info reporter needs the Cargo profile and the compiler version,
//! but those facts only exist while Cargo runs. This script captures them and
//! re-exports them as plain environment constants that the library reads with
//! `option_env!`. A missing capture is never an error; the library degrades
//! to its documented fallbacks.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=PROFILE");

    // "debug" or "release"; custom profiles inherit one of the two.
    if let Ok(profile) = env::var("PROFILE") {
        println!("cargo:rustc-env=HELLO_BUILD_PROFILE={profile}");
    }

    // Ask the same rustc that builds this crate for its identity. The output
    // looks like `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    if let Some((family, major, minor)) = rustc_identity(&rustc) {
        println!("cargo:rustc-env=HELLO_RUSTC_FAMILY={family}");
        println!("cargo:rustc-env=HELLO_RUSTC_MAJOR={major}");
        println!("cargo:rustc-env=HELLO_RUSTC_MINOR={minor}");
    }
}

/// Parse `<family> <major>.<minor>.<patch> ...` out of `rustc --version`.
fn rustc_identity(rustc: &str) -> Option<(String, u32, u32)> {
    let out = Command::new(rustc).arg("--version").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?;
    let mut words = text.split_whitespace();
    let family = words.next()?.to_owned();
    let mut version = words.next()?.split('.');
    let major = version.next()?.parse().ok()?;
    let minor = version.next()?.parse().ok()?;
    Some((family, major, minor))
}
