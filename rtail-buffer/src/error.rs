// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailError {
    #[error("could not allocate {requested} {unit} for the {what}")]
    Allocation {
        what: &'static str,
        requested: usize,
        unit: &'static str,
        #[source]
        source: TryReserveError,
    },
    #[error("a line ring must hold at least one line")]
    ZeroCapacity,
    #[error("failed to read input")]
    Read(#[source] std::io::Error),
    #[error("failed to write output")]
    Write(#[source] std::io::Error),
}

impl TailError {
    pub(crate) const fn allocation(
        what: &'static str,
        requested: usize,
        unit: &'static str,
        source: TryReserveError,
    ) -> Self {
        Self::Allocation {
            what,
            requested,
            unit,
            source,
        }
    }

    /// True when the output side went away (e.g. `rtail file | head -1`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Raised once per run, the first time a line is longer than the scanner's limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationWarning {
    pub limit: usize,
}

impl std::fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "One or more lines are longer than {}, so their whole content could not be displayed.",
            self.limit
        )
    }
}
