// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Maximum number of bytes kept for a single line, terminator excluded.
/// Anything past this is dropped until the next newline.
pub const LINE_LENGTH_LIMIT: usize = 16383;

/// Number of trailing lines printed when `-n` is not given.
pub const DEFAULT_LINES: u64 = 10;

/// Largest value accepted for `-n`.
pub const LINE_COUNT_LIMIT: u64 = 4_200_000_000;
