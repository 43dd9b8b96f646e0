// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use crate::{
    error::{TailError, TruncationWarning},
    ring::LineRing,
    scanner::{ByteSource, LineScanner, ScanSummary},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailSummary {
    pub scanned: ScanSummary,
    /// Lines that fell out of the ring before the drain.
    pub evicted: u64,
    pub written: usize,
}

/// Write every line left in `ring` to `out`, oldest first, and flush.
///
/// Returns how many lines were written. The ring is empty afterwards unless
/// a write failed.
///
/// # Errors
/// Returns [`TailError::Write`] if writing or flushing fails.
pub fn drain_into<W: Write + ?Sized>(ring: &mut LineRing, out: &mut W) -> Result<usize, TailError> {
    let mut written = 0;

    for line in ring.drain() {
        line.write_to(out).map_err(TailError::Write)?;
        written += 1;
    }
    out.flush().map_err(TailError::Write)?;

    Ok(written)
}

/// Copy the last `lines` lines of `input` to `output`.
///
/// `lines == 0` returns straight away: nothing is read, allocated or written.
/// `on_warning` is called at most once, the first time a line is truncated.
///
/// # Errors
/// [`TailError::Allocation`] if the ring or a line cannot be allocated, and
/// [`TailError::Read`] / [`TailError::Write`] on I/O failure.
pub fn tail<R, W, F>(
    input: &mut R,
    output: &mut W,
    lines: usize,
    on_warning: F,
) -> Result<TailSummary, TailError>
where
    R: ByteSource + ?Sized,
    W: Write + ?Sized,
    F: FnMut(TruncationWarning),
{
    if lines == 0 {
        debug!("Zero lines requested, skipping input");
        return Ok(TailSummary::default());
    }

    let mut ring = LineRing::new(lines)?;
    let mut scanner = LineScanner::new()?;

    let scan = scanner.feed(input, &mut ring, on_warning)?;
    let evicted = ring.evicted();
    let written = drain_into(&mut ring, output)?;

    debug!(
        "Read {} lines ({} truncated), evicted {evicted}, wrote {written}",
        scan.lines, scan.truncated_lines
    );

    Ok(TailSummary {
        scanned: scan,
        evicted,
        written,
    })
}
