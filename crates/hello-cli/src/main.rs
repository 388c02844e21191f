//! # hello
//!
//! Demonstration entry point for the Rust console-application template.
//!
//! ## Startup sequence
//!
//! 1. Initialise the tracing subscriber (`RUST_LOG` controls verbosity).
//! 2. Build the terminal [`Console`].
//! 3. Print the greeting, the template banner, the build info, and the
//!    counting demonstration.
//!
//! No command-line arguments are recognised; the sequence is fixed. The
//! process exits 0 unless writing to the terminal itself fails, which maps
//! through the error exit-code table in `hello_cli::error`.

use std::process::ExitCode;

use tracing::{debug, info};

use hello_core::{build_info::BuildInfo, counter, greeting::greeting};

use hello_cli::{
    error::CliResult,
    logging::init_logging,
    output::Console,
};

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(version = hello_core::VERSION, "demo started");

    let console = Console::from_env();
    match run(&console) {
        Ok(()) => {
            info!("demo completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log();
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// The fixed demonstration sequence.
fn run(console: &Console) -> CliResult<()> {
    console.print(&greeting(Some("World")))?;
    console.print("This is a Rust console application created with nix-polyglot.")?;
    console.blank()?;

    console.print(&BuildInfo::current().to_string())?;
    console.blank()?;

    counter::print_count(counter::DEFAULT_COUNT)?;

    Ok(())
}
