//! Gesture History - Time-stamped sequence buffer
//!
//! Recognized primitives wait here until they complete a combo or age out.
//! Three edits are allowed: append at the newest end, prune from the oldest
//! end, and consume from the newest end after an accepted match.
//!
//! # Design
//! Fixed-size ring buffer (no alloc). When full, the oldest entry is
//! overwritten; capacity is well above the longest combo pattern, so an
//! overwritten entry could never take part in a match anyway.

use log::debug;

use super::primitive::PrimitiveGesture;

// ═══════════════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum buffered gestures (power of 2 for fast modulo)
pub const HISTORY_SIZE: usize = 32;

/// Mask for ring buffer indexing
const HISTORY_MASK: usize = HISTORY_SIZE - 1;

/// Symbols of the buffer, oldest first
pub type GestureSnapshot = heapless::Vec<PrimitiveGesture, HISTORY_SIZE>;

// ═══════════════════════════════════════════════════════════════════════════════
// GESTURE STAMP
// ═══════════════════════════════════════════════════════════════════════════════

/// A recognized gesture and when it was recognized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureStamp {
    pub gesture: PrimitiveGesture,
    /// Milliseconds, caller's clock
    pub timestamp: u64,
}

impl GestureStamp {
    /// Empty slot (placeholder)
    pub const EMPTY: Self = Self {
        gesture: PrimitiveGesture::Unknown,
        timestamp: 0,
    };

    pub const fn new(gesture: PrimitiveGesture, timestamp: u64) -> Self {
        Self { gesture, timestamp }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// GESTURE HISTORY
// ═══════════════════════════════════════════════════════════════════════════════

/// Ring buffer of recent gestures, oldest first
pub struct GestureHistory {
    /// The buffer
    entries: [GestureStamp; HISTORY_SIZE],
    /// Write position (next slot to write)
    head: usize,
    /// Number of valid entries
    count: usize,
}

impl GestureHistory {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            entries: [GestureStamp::EMPTY; HISTORY_SIZE],
            head: 0,
            count: 0,
        }
    }

    /// Append a gesture at the newest end
    ///
    /// `Unknown` is never buffered and is ignored here. Timestamps never go
    /// backwards: an older `timestamp` is raised to the newest one.
    pub fn push(&mut self, gesture: PrimitiveGesture, timestamp: u64) {
        if !gesture.is_known() {
            return;
        }

        let timestamp = match self.last() {
            Some(last) if last.timestamp > timestamp => {
                debug!("clock went backwards ({} < {}), holding timestamp", timestamp, last.timestamp);
                last.timestamp
            }
            _ => timestamp,
        };

        self.entries[self.head] = GestureStamp::new(gesture, timestamp);
        self.head = (self.head + 1) & HISTORY_MASK;

        if self.count < HISTORY_SIZE {
            self.count += 1;
        }
    }

    /// Drop every entry stamped strictly before `cutoff`
    ///
    /// Returns how many entries were removed. Calling it again with the
    /// same cutoff removes nothing.
    pub fn prune(&mut self, cutoff: u64) -> usize {
        let mut removed = 0;
        while let Some(oldest) = self.oldest() {
            if oldest.timestamp >= cutoff {
                break;
            }
            self.count -= 1;
            removed += 1;
        }
        removed
    }

    /// Remove the newest `n` entries (clamped to the buffer length)
    pub fn consume_tail(&mut self, n: usize) -> usize {
        let n = n.min(self.count);
        self.head = (self.head + HISTORY_SIZE - n) & HISTORY_MASK;
        self.count -= n;
        n
    }

    /// Current symbols, oldest first
    pub fn snapshot(&self) -> GestureSnapshot {
        let mut symbols = GestureSnapshot::new();
        for stamp in self.iter() {
            // Capacity equals HISTORY_SIZE, push cannot fail
            let _ = symbols.push(stamp.gesture);
        }
        symbols
    }

    /// Get the most recent entry
    pub fn last(&self) -> Option<&GestureStamp> {
        self.at(0)
    }

    /// Get the oldest entry
    pub fn oldest(&self) -> Option<&GestureStamp> {
        self.count.checked_sub(1).and_then(|offset| self.at(offset))
    }

    /// Get entry at offset from most recent (0 = most recent)
    pub fn at(&self, offset: usize) -> Option<&GestureStamp> {
        if offset >= self.count {
            return None;
        }
        let idx = (self.head + HISTORY_SIZE - 1 - offset) & HISTORY_MASK;
        Some(&self.entries[idx])
    }

    /// Iterate oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GestureStamp> + '_ {
        (0..self.count).rev().filter_map(move |offset| self.at(offset))
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
