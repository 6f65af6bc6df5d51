use alloc::boxed::Box;

/// Fixed-length slot storage with a write cursor and an occupancy count.
///
/// Every buffer mode reads and writes through this type. The slot array is
/// allocated once and never resized; `filled` always equals the number of
/// `Some` slots.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct Slots<T> {
    data: Box<[Option<T>]>,
    cursor: usize,
    filled: usize,
}

impl<T> Slots<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: core::iter::repeat_with(|| None).take(capacity).collect(),
            cursor: 0,
            filled: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub(crate) fn filled(&self) -> usize {
        self.filled
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub(crate) fn is_full(&self) -> bool {
        self.filled == self.data.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)?.as_ref()
    }

    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        &self.data
    }

    /// Stores `value` at `index`, replacing whatever the slot held.
    ///
    /// # Contract
    ///
    /// `index` must be below the capacity. Callers validate it first.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn put(&mut self, index: usize, value: T) -> &T {
        let slot = &mut self.data[index];
        if slot.is_none() {
            self.filled += 1;
        }
        slot.insert(value)
    }

    /// Empties the slot at `index` and returns its value.
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        let value = self.data.get_mut(index)?.take();
        if value.is_some() {
            self.filled -= 1;
        }
        value
    }

    /// Nearest occupied slot at or after `start`, wrapping around the end.
    pub(crate) fn first_from(&self, start: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.capacity();
        (0..capacity)
            .map(|offset| (start + offset) % capacity)
            .find(|&at| self.get(at).is_some())
    }

    /// Nearest occupied slot before `start`, walking backwards and wrapping
    /// around the front.
    pub(crate) fn last_before(&self, start: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.capacity();
        (1..=capacity)
            .map(|offset| (start + capacity - offset) % capacity)
            .find(|&at| self.get(at).is_some())
    }

    /// Rotates the whole store `by` positions towards the front. The first
    /// `by` slots end up at the back.
    pub(crate) fn shift_front(&mut self, by: usize) {
        self.data.rotate_left(by % self.capacity());
    }

    pub(crate) fn clear(&mut self) {
        self.data.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
        self.filled = 0;
    }
}
