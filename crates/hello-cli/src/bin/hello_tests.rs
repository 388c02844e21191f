//! # hello-tests
//!
//! Self test for the template: substring checks over the three library
//! functions, tallied and reported by the hand-rolled harness.
//!
//! ## Exit codes
//!
//! | Code | Meaning               |
//! |------|-----------------------|
//! |  0   | Every check passed    |
//! |  1   | At least one failure  |
//!
//! A failed check never aborts the run; every check always executes.

use std::process::ExitCode;

use hello_core::prelude::*;

use hello_cli::{
    error::CliResult,
    harness::Checker,
    logging::init_logging,
    output::Console,
};

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let console = Console::from_env();
    match run(&console) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            e.log();
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run every check, report the tally, and say whether all of them passed.
fn run(console: &Console) -> CliResult<bool> {
    console.print("Running Rust template tests...")?;
    console.blank()?;

    let mut checker = Checker::new(console);

    // Greeting producer.
    let named = greeting(Some("Test"));
    checker.check(
        named.contains("Hello, Test"),
        "greeting contains 'Hello, Test'",
    )?;
    checker.check(named.contains("Rust"), "greeting contains 'Rust'")?;
    checker.check(
        greeting(None).contains("World"),
        "default greeting contains 'World'",
    )?;

    // Counter printer, captured into a buffer.
    let mut buf = Vec::new();
    write_count(&mut buf, 5)?;
    let counted = String::from_utf8_lossy(&buf);
    let mut lines = counted.lines();
    checker.check(
        lines.next() == Some("Counting demonstration:"),
        "counter emits the header line",
    )?;
    let body: Vec<&str> = lines.collect();
    let indexed_in_order =
        body.len() == 5 && body.iter().enumerate().all(|(i, l)| *l == format!("Count: {i}"));
    checker.check(indexed_in_order, "counter emits 5 indexed body lines")?;

    // Build-info reporter.
    let info = BuildInfo::current().to_string();
    checker.check(!info.is_empty(), "build info is not empty")?;
    checker.check(info.contains("build"), "build info names the build mode")?;
    let label_hits = [BuildMode::Debug, BuildMode::Release, BuildMode::Standard]
        .iter()
        .filter(|m| info.contains(m.label()))
        .count();
    checker.check(label_hits == 1, "exactly one build mode label appears")?;

    let tally = checker.report()?;
    console.blank()?;
    if tally.all_passed() {
        console.success("\u{1f389} All tests passed!")?;
    } else {
        console.failure("\u{1f4a5} Some tests failed!")?;
    }

    Ok(tally.all_passed())
}
