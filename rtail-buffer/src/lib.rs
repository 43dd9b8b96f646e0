// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Core of `rtail`: the line scanner that frames an input stream into
//! bounded lines, and the fixed-capacity ring that keeps the last N of them.

pub mod drain;
pub mod error;
pub mod line;
pub mod ring;
pub mod scanner;

pub use drain::{drain_into, tail, TailSummary};
pub use error::{TailError, TruncationWarning};
pub use line::Line;
pub use ring::LineRing;
pub use scanner::{ByteSource, LineScanner, ScanSummary};

#[macro_use]
extern crate tracing;
