// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use crate::error::TailError;

/// One logical line of input.
///
/// The stored bytes keep the line's `\n` when the input had one; only the
/// last line of an input can lack it. Content never contains a `\n` of its
/// own, so the last byte alone says whether the line is terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Box<[u8]>,
}

impl Line {
    #[must_use]
    pub fn new(mut content: Vec<u8>, terminated: bool) -> Self {
        if terminated {
            content.push(b'\n');
        }

        Self {
            bytes: content.into_boxed_slice(),
        }
    }

    /// Copy `content` into a freshly allocated line of exactly the size it needs.
    ///
    /// # Errors
    /// Returns [`TailError::Allocation`] if the storage cannot be reserved.
    pub fn try_from_slice(content: &[u8], terminated: bool) -> Result<Self, TailError> {
        let size = content.len() + usize::from(terminated);
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|e| TailError::allocation("line", size, "bytes", e))?;
        bytes.extend_from_slice(content);
        if terminated {
            bytes.push(b'\n');
        }

        // capacity == len, so this does not reallocate
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    #[must_use]
    pub fn content(&self) -> &[u8] {
        self.bytes.strip_suffix(b"\n").unwrap_or(&self.bytes)
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }

    /// Length of the content, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Write the line verbatim, newline included when the input had one.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminated_line_writes_newline() {
        let line = Line::new(b"abc".to_vec(), true);
        let mut out = Vec::new();
        assert!(line.write_to(&mut out).is_ok());
        assert_eq!(out, b"abc\n");
        assert_eq!(line.content(), b"abc");
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn unterminated_line_writes_bare_content() {
        let line = Line::new(b"abc".to_vec(), false);
        let mut out = Vec::new();
        assert!(line.write_to(&mut out).is_ok());
        assert_eq!(out, b"abc");
        assert!(!line.is_terminated());
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn empty_terminated_line_is_just_a_newline() {
        let line = Line::new(Vec::new(), true);
        let mut out = Vec::new();
        assert!(line.write_to(&mut out).is_ok());
        assert_eq!(out, b"\n");
        assert!(line.is_empty());
        assert!(line.is_terminated());
    }

    #[test]
    fn try_from_slice_matches_new() {
        let line = Line::try_from_slice(b"hello", true);
        assert!(matches!(&line, Ok(l) if *l == Line::new(b"hello".to_vec(), true)));
        if let Ok(line) = line {
            assert_eq!(line.bytes.len(), 6);
            assert_eq!(line.len(), 5);
        }
    }

    #[test]
    fn ring_slot_is_two_words() {
        // A ring of n lines reserves n + 1 of these up front.
        assert_eq!(
            std::mem::size_of::<Option<Line>>(),
            2 * std::mem::size_of::<usize>()
        );
    }
}
