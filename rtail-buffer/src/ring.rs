// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{error::TailError, line::Line};

/// Ring of the most recent lines, as used by the tail pipeline.
pub type LineRing = Ring<Line>;

/// Fixed-capacity FIFO that evicts its oldest item when a new one arrives
/// while full.
///
/// Backed by `capacity + 1` slots. `head` indexes the oldest item and `tail`
/// the slot the next item goes into; both wrap modulo the slot count. The
/// spare slot is what tells the two states apart:
///
///  - empty: `head == tail`
///  - full:  `tail + 1 == head` (mod slot count)
pub struct Ring<T> {
    /// Storage is reserved up front and only ever grown into, never
    /// reallocated. `slots.len()` trails `tail` until the first wrap.
    slots: Vec<Option<T>>,

    /// Number of slots, `capacity + 1`.
    size: usize,

    head: usize,
    tail: usize,

    evicted: u64,
}

impl<T> Ring<T> {
    /// Create a ring that holds at most `capacity` items.
    ///
    /// # Errors
    /// [`TailError::ZeroCapacity`] when `capacity` is 0, and
    /// [`TailError::Allocation`] when the slot storage cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self, TailError> {
        if capacity == 0 {
            return Err(TailError::ZeroCapacity);
        }

        let size = capacity.saturating_add(1);
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|e| TailError::allocation("line ring", size, "slots", e))?;

        trace!("Created ring with capacity {capacity}");

        Ok(Self {
            slots,
            size,
            head: 0,
            tail: 0,
            evicted: 0,
        })
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.size - 1
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.size - self.head + self.tail
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.next(self.tail) == self.head
    }

    /// How many items have been pushed out by [`put`](Self::put) so far.
    #[must_use]
    pub const fn evicted(&self) -> u64 {
        self.evicted
    }

    const fn next(&self, idx: usize) -> usize {
        (idx + 1) % self.size
    }

    /// Insert `item` as the most recent entry, dropping the oldest one first
    /// if the ring is full.
    pub fn put(&mut self, item: T) {
        if self.is_full() {
            // Dropping the evicted item releases it.
            self.slots[self.head] = None;
            self.head = self.next(self.head);
            self.evicted += 1;
        }

        if self.tail == self.slots.len() {
            // Still inside the reserved storage: this push never reallocates.
            self.slots.push(Some(item));
        } else {
            self.slots[self.tail] = Some(item);
        }
        self.tail = self.next(self.tail);
    }

    /// Remove and return the oldest entry, or `None` when the ring is empty.
    pub fn take_oldest(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.slots[self.head].take();
        self.head = self.next(self.head);
        item
    }

    /// Iterate over the entries oldest first, removing each one.
    ///
    /// Entries the iterator does not reach stay in the ring.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { ring: self }
    }
}

impl<T> std::fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ring")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("evicted", &self.evicted)
            .finish_non_exhaustive()
    }
}

pub struct Drain<'a, T> {
    ring: &'a mut Ring<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ring.take_oldest()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.ring.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

// ============================================================================
// Unit Tests for Ring
// ============================================================================
