// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use proptest::prelude::*;
use rtail_buffer::{tail, LineRing};

/// Reference answer: the last `n` newline-separated chunks, terminators intact.
fn expected_tail(input: &[u8], n: usize) -> Vec<u8> {
    let chunks: Vec<&[u8]> = input.split_inclusive(|b| *b == b'\n').collect();
    let skip = chunks.len().saturating_sub(n);
    chunks[skip..].concat()
}

proptest! {
    /// Output is exactly the last C lines of the input, byte for byte.
    #[test]
    fn output_is_last_lines(
        lines in prop::collection::vec("[a-z ]{0,12}", 0..40),
        trailing_newline in any::<bool>(),
        capacity in 1usize..20,
    ) {
        let mut input = lines.join("\n").into_bytes();
        if trailing_newline && !lines.is_empty() {
            input.push(b'\n');
        }

        let mut source = input.as_slice();
        let mut out = Vec::new();
        let summary = tail(&mut source, &mut out, capacity, |_| {}).unwrap();

        prop_assert_eq!(&out, &expected_tail(&input, capacity));
        prop_assert!(summary.written <= capacity);
    }

    /// The ring never holds more than its capacity and keeps insertion order.
    #[test]
    fn ring_keeps_most_recent(
        items in prop::collection::vec(any::<u32>(), 0..200),
        capacity in 1usize..32,
    ) {
        let mut ring = rtail_buffer::ring::Ring::new(capacity).unwrap();
        for item in &items {
            ring.put(*item);
            prop_assert!(ring.len() <= capacity);
        }

        let kept: Vec<u32> = ring.drain().collect();
        let skip = items.len().saturating_sub(capacity);
        prop_assert_eq!(kept, items[skip..].to_vec());
        prop_assert!(LineRing::new(capacity).unwrap().is_empty());
    }
}
