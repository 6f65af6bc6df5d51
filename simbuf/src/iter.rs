use crate::buffer::Buffer;
use crate::mode::Mode;

/// Iterator over the logical contents of a `Buffer`, oldest element first.
///
/// The logical sequence of a `Cyclic` buffer starts at its write position and
/// wraps around the end of the backing store. Empty slots are skipped. Use
/// `.rev()` to iterate newest first.
///
/// This iterator implements `Clone`.
pub struct BufferIter<'a, T> {
    data: &'a [Option<T>],
    start: usize,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for BufferIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            start: self.start,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> BufferIter<'a, T> {
    fn slot_at(&self, offset: usize) -> Option<&'a T> {
        let position = (self.start + offset) % self.data.len();
        self.data.get(position)?.as_ref()
    }
}

impl<'a, T> Iterator for BufferIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 && self.front < self.back {
            let item = self.slot_at(self.front);
            self.front += 1;
            if item.is_some() {
                self.remaining -= 1;
                return item;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for BufferIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 && self.front < self.back {
            self.back -= 1;
            let item = self.slot_at(self.back);
            if item.is_some() {
                self.remaining -= 1;
                return item;
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for BufferIter<'_, T> {}

impl<'a, T, M: Mode> IntoIterator for &'a Buffer<T, M> {
    type Item = &'a T;
    type IntoIter = BufferIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        BufferIter {
            data: self.as_slots(),
            start: self.logical_start(),
            front: 0,
            back: self.capacity(),
            remaining: self.len(),
        }
    }
}
