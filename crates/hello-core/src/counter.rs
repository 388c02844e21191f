//! Counter printer.
//!
//! Writes a fixed header followed by one indexed line per iteration. The
//! count is `u32`, so negative counts are unrepresentable; zero produces
//! only the header.

use std::io::{self, Write};

use tracing::trace;

/// Iterations performed when the caller does not choose a count.
pub const DEFAULT_COUNT: u32 = 5;

/// Write the counting demonstration to `out`.
///
/// Emits the header line, then `Count: <i>` for each `i` in `0..count`.
/// Write failures are propagated, never swallowed.
pub fn write_count<W: Write>(out: &mut W, count: u32) -> io::Result<()> {
    writeln!(out, "Counting demonstration:")?;
    for i in 0..count {
        trace!(iteration = i, "counter tick");
        writeln!(out, "Count: {i}")?;
    }
    Ok(())
}

/// [`write_count`] against a locked stdout handle.
pub fn print_count(count: u32) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_count(&mut handle, count)
}

// ── tests ─────────────────────────────────────────────────────────────────────
