//! Assertion-and-tally runner backing the `hello-tests` binary.
//!
//! Deliberately hand-rolled: the template ships the same minimal harness in
//! every language rendition so a freshly generated project can prove its
//! toolchain end to end before any real test framework is wired in.

use std::io;

use tracing::debug;

use crate::output::Console;

// ── Tally ─────────────────────────────────────────────────────────────────────

/// Running totals for one harness invocation.
///
/// An explicit local value, never process-wide state. Invariants:
/// `passed() <= run()` and `failed() == run() - passed()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    run: u32,
    passed: u32,
}

impl Tally {
    /// Record one check outcome.
    pub fn record(&mut self, passed: bool) {
        self.run += 1;
        if passed {
            self.passed += 1;
        }
    }

    pub fn run(&self) -> u32 {
        self.run
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.run - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.run
    }
}

// ── Checker ───────────────────────────────────────────────────────────────────

/// Couples a [`Tally`] with the console so every check both records and
/// reports its outcome.
pub struct Checker<'a> {
    console: &'a Console,
    tally: Tally,
}

impl<'a> Checker<'a> {
    pub fn new(console: &'a Console) -> Self {
        Self {
            console,
            tally: Tally::default(),
        }
    }

    /// Record one check. A failed check is reported and counted but never
    /// aborts the remaining checks.
    pub fn check(&mut self, condition: bool, label: &str) -> io::Result<()> {
        self.tally.record(condition);
        debug!(label, passed = condition, "check recorded");
        if condition {
            self.console.success(&format!("PASS: {label}"))
        } else {
            self.console.failure(&format!("FAIL: {label}"))
        }
    }

    /// Print the final report and hand the tally back to the caller.
    pub fn report(self) -> io::Result<Tally> {
        let tally = self.tally;
        self.console.blank()?;
        self.console.header("\u{1f4ca} Test Results:")?;
        self.console.print(&format!("Tests run: {}", tally.run()))?;
        self.console.print(&format!("Tests passed: {}", tally.passed()))?;
        self.console.print(&format!("Tests failed: {}", tally.failed()))?;
        Ok(tally)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
