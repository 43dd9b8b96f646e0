// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::{BufRead, ErrorKind};

use rtail_common::limits::LINE_LENGTH_LIMIT;

use crate::{
    error::{TailError, TruncationWarning},
    line::Line,
    ring::LineRing,
};

/// Anything that can hand out input one byte at a time.
pub trait ByteSource {
    /// The next byte, or `None` at end of input.
    ///
    /// # Errors
    /// Returns the underlying read error.
    fn next_byte(&mut self) -> std::io::Result<Option<u8>>;
}

impl<R: BufRead + ?Sized> ByteSource for R {
    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        loop {
            match self.fill_buf() {
                Ok(buf) => {
                    let Some(&byte) = buf.first() else {
                        return Ok(None);
                    };
                    self.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines framed so far.
    pub lines: u64,
    /// Lines that hit the length limit and lost their tail.
    pub truncated_lines: u64,
}

/// Splits a byte stream into [`Line`]s of at most `limit` bytes.
///
/// Bytes past the limit are dropped up to the next `\n`. The first time that
/// happens the caller is told through a [`TruncationWarning`]; later
/// truncations are only counted.
#[derive(Debug)]
pub struct LineScanner {
    limit: usize,

    /// Bytes of the line being framed. Reserved once, reused for every line.
    scratch: Vec<u8>,

    /// The current line has already hit the limit.
    overflowed: bool,

    /// The one-time warning has been handed out.
    warned: bool,

    summary: ScanSummary,
}

impl LineScanner {
    /// Scanner with the default limit of [`LINE_LENGTH_LIMIT`] bytes per line.
    ///
    /// # Errors
    /// Returns [`TailError::Allocation`] if the line buffer cannot be reserved.
    pub fn new() -> Result<Self, TailError> {
        Self::with_limit(LINE_LENGTH_LIMIT)
    }

    /// # Errors
    /// Returns [`TailError::Allocation`] if the line buffer cannot be reserved.
    pub fn with_limit(limit: usize) -> Result<Self, TailError> {
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(limit)
            .map_err(|e| TailError::allocation("line buffer", limit, "bytes", e))?;

        Ok(Self {
            limit,
            scratch,
            overflowed: false,
            warned: false,
            summary: ScanSummary::default(),
        })
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Frame the next line from `source`.
    ///
    /// Returns `Ok(None)` at end of input. Input that ends right after a
    /// `\n` (or is empty) produces no trailing empty line; input that ends
    /// without one produces a final unterminated line.
    ///
    /// # Errors
    /// [`TailError::Read`] on a read failure, [`TailError::Allocation`] if the
    /// line's storage cannot be obtained.
    pub fn next_line<S, F>(
        &mut self,
        source: &mut S,
        on_warning: &mut F,
    ) -> Result<Option<Line>, TailError>
    where
        S: ByteSource + ?Sized,
        F: FnMut(TruncationWarning),
    {
        loop {
            let byte = source.next_byte().map_err(TailError::Read)?;

            match byte {
                None if self.scratch.is_empty() && !self.overflowed => return Ok(None),
                None => return self.emit(false).map(Some),
                Some(b'\n') => return self.emit(true).map(Some),
                Some(_) if self.overflowed => {}
                Some(_) if self.scratch.len() == self.limit => self.overflow(on_warning),
                Some(b) => self.scratch.push(b),
            }
        }
    }

    /// Frame every line of `source` into `ring`, oldest lines falling out as
    /// newer ones arrive.
    ///
    /// # Errors
    /// See [`next_line`](Self::next_line). On error the lines framed so far
    /// stay in the ring.
    pub fn feed<S, F>(
        &mut self,
        source: &mut S,
        ring: &mut LineRing,
        mut on_warning: F,
    ) -> Result<ScanSummary, TailError>
    where
        S: ByteSource + ?Sized,
        F: FnMut(TruncationWarning),
    {
        while let Some(line) = self.next_line(source, &mut on_warning)? {
            ring.put(line);
        }

        Ok(self.summary)
    }

    fn overflow<F: FnMut(TruncationWarning)>(&mut self, on_warning: &mut F) {
        self.overflowed = true;
        self.summary.truncated_lines += 1;

        if !self.warned {
            self.warned = true;
            on_warning(TruncationWarning { limit: self.limit });
        }
    }

    fn emit(&mut self, terminated: bool) -> Result<Line, TailError> {
        let line = Line::try_from_slice(&self.scratch, terminated)?;

        self.scratch.clear();
        self.overflowed = false;
        self.summary.lines += 1;

        Ok(line)
    }
}
