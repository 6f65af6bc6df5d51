use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Bound, Index, Range, RangeBounds};

use crate::error::BufferError;
use crate::iter::BufferIter;
use crate::mode::{Cyclic, DestructiveMode, Mode, ModeKind};
use crate::store::Slots;

/// Occupancy of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferState {
    Empty,
    Partial,
    Full,
}

impl fmt::Display for BufferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferState::Empty => "empty",
            BufferState::Partial => "partial",
            BufferState::Full => "full",
        })
    }
}

/// Order of the snapshot returned by [`Buffer::content`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentOrder {
    /// Most recently written element first
    #[default]
    NewestFirst,
    /// Oldest element first, the order of the writes
    OldestFirst,
}

/// Diagnostic description of a buffer, see [`Buffer::summary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSummary {
    pub mode: ModeKind,
    pub eltype: &'static str,
    pub length: usize,
    pub index: usize,
    pub state: BufferState,
}

impl fmt::Display for BufferSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Buffer(mode:{}, eltype:{}, length:{}, index:{}, state:{})",
            self.mode, self.eltype, self.length, self.index, self.state
        )
    }
}

/// A fixed-capacity buffer whose read/write behavior is set by its mode `M`.
///
/// The backing store holds `capacity` optional slots and is never resized.
/// The default element type is `f64` and the default mode is [`Cyclic`].
pub struct Buffer<T = f64, M: Mode = Cyclic> {
    slots: Slots<T>,
    mode: PhantomData<M>,
}

impl<T, M: Mode> Buffer<T, M> {
    /// Creates a buffer with `capacity` empty slots.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidCapacity { capacity });
        }
        Ok(Self {
            slots: Slots::new(capacity),
            mode: PhantomData,
        })
    }

    #[must_use]
    pub fn mode(&self) -> ModeKind {
        M::KIND
    }

    /// Number of slots in the backing store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of elements in the logical sequence, see [`Buffer::iter`].
    /// This is the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.filled()
    }

    /// Position of the next mode write.
    #[must_use]
    pub fn index(&self) -> usize {
        self.slots.cursor()
    }

    /// Returns `true` if no slot holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if every slot holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    #[must_use]
    pub fn state(&self) -> BufferState {
        if self.slots.is_empty() {
            BufferState::Empty
        } else if self.slots.is_full() {
            BufferState::Full
        } else {
            BufferState::Partial
        }
    }

    #[must_use]
    pub fn summary(&self) -> BufferSummary {
        BufferSummary {
            mode: M::KIND,
            eltype: core::any::type_name::<T>(),
            length: self.capacity(),
            index: self.index(),
            state: self.state(),
        }
    }

    /// Writes `value` according to the buffer mode and returns a reference
    /// to the stored value.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::CapacityExceeded` if a `Normal`, `Lifo` or
    /// `Fifo` buffer is full. The buffer is left unchanged. `Cyclic` writes
    /// never fail.
    pub fn write(&mut self, value: T) -> Result<&T, BufferError> {
        M::write(&mut self.slots, value)
    }

    /// Reads one element according to the buffer mode.
    ///
    /// `Normal` and `Cyclic` return a copy of the last written element and
    /// keep it. `Lifo` and `Fifo` remove the element they return.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::EmptyRead` if there is nothing to read.
    pub fn read(&mut self) -> Result<T, BufferError>
    where
        T: Clone,
    {
        M::read(&mut self.slots).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(mode = %M::KIND, "read from empty buffer");
            BufferError::EmptyRead { mode: M::KIND }
        })
    }

    /// Returns the element the next [`Buffer::read`] would return, without
    /// consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.slots.get(M::read_position(&self.slots)?)
    }

    /// Writes `value` until the buffer is full and returns the number of
    /// writes performed.
    ///
    /// # Errors
    ///
    /// Propagates a rejected write. This does not happen for a buffer whose
    /// slots were only changed through this API.
    pub fn fill(&mut self, value: T) -> Result<usize, BufferError>
    where
        T: Clone,
    {
        let mut writes = 0;
        while !self.is_full() {
            self.write(value.clone())?;
            writes += 1;
        }
        Ok(writes)
    }

    /// Returns a snapshot of the logical contents.
    ///
    /// `ContentOrder::NewestFirst` (the default) puts the most recent write
    /// first.
    #[must_use]
    pub fn content(&self, order: ContentOrder) -> Vec<T>
    where
        T: Clone,
    {
        match order {
            ContentOrder::OldestFirst => self.iter().cloned().collect(),
            ContentOrder::NewestFirst => self.iter().rev().cloned().collect(),
        }
    }

    /// Returns an iterator over the logical contents, oldest first.
    #[must_use]
    pub fn iter(&self) -> BufferIter<'_, T> {
        self.into_iter()
    }

    /// Empties every slot and resets the write position.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Raw view of the backing slots.
    #[must_use]
    pub fn as_slots(&self) -> &[Option<T>] {
        self.slots.as_slice()
    }

    /// Gets the value of the slot at `index`.
    ///
    /// Returns `None` if the slot is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Gets the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::IndexOutOfRange` if `index` is not below the capacity.
    pub fn slot(&self, index: usize) -> Result<Option<&T>, BufferError> {
        self.slots
            .as_slice()
            .get(index)
            .map(Option::as_ref)
            .ok_or(BufferError::IndexOutOfRange {
                index,
                length: self.capacity(),
            })
    }

    /// Gets the last slot of the backing store.
    #[must_use]
    pub fn last_slot(&self) -> Option<&T> {
        self.slots.get(self.capacity() - 1)
    }

    /// Gets a contiguous range of slots. Accepts any range form: `2..4`,
    /// `2..=3`, `..3`, `3..` or `..`.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::IndexOutOfRange` if the range does not lie within
    /// the backing store.
    pub fn slots<R: RangeBounds<usize>>(&self, range: R) -> Result<&[Option<T>], BufferError> {
        let range = self.resolve_range(&range)?;
        self.slots
            .as_slice()
            .get(range.clone())
            .ok_or(BufferError::IndexOutOfRange {
                index: range.end,
                length: self.capacity(),
            })
    }

    /// Gets the slots at the given positions, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::IndexOutOfRange` for the first position beyond
    /// the capacity.
    pub fn gather(&self, indices: &[usize]) -> Result<Vec<Option<&T>>, BufferError> {
        indices.iter().map(|&index| self.slot(index)).collect()
    }

    /// Assigns `value` to the slot at `index`.
    ///
    /// Direct assignment bypasses the mode: the write position does not move.
    /// The value still counts as an element, so reads, iteration and
    /// [`Buffer::len`] reach it.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::IndexOutOfRange` if `index` is not below the capacity.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        if index >= self.capacity() {
            return Err(BufferError::IndexOutOfRange {
                index,
                length: self.capacity(),
            });
        }
        self.slots.put(index, value);
        Ok(())
    }

    /// Assigns `values` to the slots in `range`.
    ///
    /// Either every slot in the range is assigned or none is.
    ///
    /// # Errors
    ///
    /// - `BufferError::IndexOutOfRange` if the range does not lie within the
    ///   backing store
    /// - `BufferError::LengthMismatch` if the number of values differs from
    ///   the range length
    pub fn set_range<R, I>(&mut self, range: R, values: I) -> Result<(), BufferError>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let range = self.resolve_range(&range)?;
        let values = values.into_iter();
        if values.len() != range.len() {
            return Err(BufferError::LengthMismatch {
                expected: range.len(),
                provided: values.len(),
            });
        }
        for (index, value) in range.zip(values) {
            self.slots.put(index, value);
        }
        Ok(())
    }

    fn resolve_range<R: RangeBounds<usize>>(
        &self,
        range: &R,
    ) -> Result<Range<usize>, BufferError> {
        let length = self.capacity();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end
                .checked_add(1)
                .ok_or(BufferError::IndexOutOfRange { index: end, length })?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        };
        if start > end {
            return Err(BufferError::IndexOutOfRange {
                index: start,
                length,
            });
        }
        if end > length {
            return Err(BufferError::IndexOutOfRange {
                index: end - 1,
                length,
            });
        }
        Ok(start..end)
    }

    pub(crate) fn logical_start(&self) -> usize {
        M::start(&self.slots)
    }
}

impl<T, M: DestructiveMode> Buffer<T, M> {
    /// Removes and returns the next element without requiring `T: Clone`.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::EmptyRead` if there is nothing to read.
    pub fn pop(&mut self) -> Result<T, BufferError> {
        M::take(&mut self.slots).ok_or(BufferError::EmptyRead { mode: M::KIND })
    }
}

impl<T, M: Mode> Index<usize> for Buffer<T, M> {
    type Output = Option<T>;

    /// # Panics
    ///
    /// Panics if `index` is not below the capacity, like slice indexing.
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots.as_slice()[index]
    }
}

impl<T: Clone, M: Mode> Clone for Buffer<T, M> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            mode: PhantomData,
        }
    }
}

impl<T: fmt::Debug, M: Mode> fmt::Debug for Buffer<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("mode", &M::KIND)
            .field("index", &self.slots.cursor())
            .field("filled", &self.slots.filled())
            .field("data", &self.slots.as_slice())
            .finish()
    }
}

impl<T, M: Mode> fmt::Display for Buffer<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}
