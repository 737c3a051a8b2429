use std::iter::Chain;
use std::slice::Iter;

use num_traits::Zero;

/// Fixed-capacity sample history, newest first.
///
/// Backed by a ring buffer with a single rotating head, so pushing a sample
/// never allocates or shifts. Logical index 0 is the most recent sample.
#[derive(Debug, Clone)]
pub struct History<T> {
    buffer: Vec<T>,
    head: usize,
}

impl<T: Copy + Zero> History<T> {
    /// Create a zero-filled history holding `capacity` samples
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![T::zero(); capacity],
            head: 0,
        }
    }
}

impl<T: Copy> History<T> {
    /// Build a history from samples ordered newest first
    pub fn from_recent(samples: Vec<T>) -> Self {
        Self {
            buffer: samples,
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Evict the oldest sample and make `sample` the newest
    pub fn push(&mut self, sample: T) {
        let n = self.buffer.len();
        if n == 0 {
            return;
        }
        self.head = if self.head == 0 { n - 1 } else { self.head - 1 };
        self.buffer[self.head] = sample;
    }

    /// Overwrite the newest sample in place
    pub fn set_newest(&mut self, sample: T) {
        if let Some(slot) = self.buffer.get_mut(self.head) {
            *slot = sample;
        }
    }

    pub fn fill(&mut self, value: T) {
        self.buffer.fill(value);
    }

    /// Overwrite the `values.len()` newest slots, `values[0]` being the newest.
    ///
    /// Values beyond the capacity are ignored.
    pub fn set_recent(&mut self, values: &[T]) {
        let n = self.buffer.len();
        for (age, &value) in values.iter().take(n).enumerate() {
            let idx = self.head + age;
            self.buffer[if idx >= n { idx - n } else { idx }] = value;
        }
    }

    /// Iterate newest to oldest.
    ///
    /// The ring is walked as two contiguous slices, keeping modulo
    /// arithmetic out of the per-sample loops.
    pub fn iter(&self) -> Chain<Iter<'_, T>, Iter<'_, T>> {
        let (older, newer) = self.buffer.split_at(self.head);
        newer.iter().chain(older.iter())
    }

    /// Snapshot newest to oldest
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// Element-wise conversion, keeping the logical order
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> History<U> {
        History::from_recent(self.iter().copied().map(f).collect())
    }
}
