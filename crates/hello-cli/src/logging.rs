//! Tracing subscriber initialisation.
//!
//! Only the binaries call [`init_logging`]; `hello-core` only *emits*
//! events — it never touches subscribers.
//!
//! The entry points recognise no command-line arguments, so verbosity comes
//! entirely from the environment: `RUST_LOG` when set, `warn` otherwise.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "hello_cli=warn,hello_core=warn";

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. Returns an
/// error if a subscriber was already registered in this process.
pub fn init_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Colour in log output follows NO_COLOR plus stderr TTY detection;
    // `std::io::IsTerminal` supersedes the deprecated `atty` crate.
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
