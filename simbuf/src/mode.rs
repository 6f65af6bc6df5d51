//! Buffer modes.
//!
//! A mode fixes how a [`Buffer`](crate::Buffer) reacts to a full store and
//! which element a read returns. Modes are zero-sized marker types selected
//! through the buffer's type parameter, so dispatch is resolved at compile
//! time. [`ModeKind`] is the matching runtime tag, used for reporting.
//!
//! | mode     | when full          | read returns         | read removes |
//! |----------|--------------------|----------------------|--------------|
//! | `Normal` | rejects the write  | last written element | no           |
//! | `Cyclic` | overwrites oldest  | last written element | no           |
//! | `Lifo`   | rejects the write  | last written element | yes          |
//! | `Fifo`   | rejects the write  | first written element| yes          |
//!
//! Every mode orders its elements as one sequence over the slot ring. `Fifo`
//! starts it at slot 0; the other modes start it at the write position, so
//! the slot just behind the write position holds the newest element. Values
//! assigned directly through the indexed API join that sequence at their slot
//! position and are read, iterated and counted like written ones. A mode
//! write landing on such a slot replaces it.

use core::fmt;

use crate::error::BufferError;
use crate::store::Slots;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Normal {}
    impl Sealed for super::Cyclic {}
    impl Sealed for super::Lifo {}
    impl Sealed for super::Fifo {}
}

/// Runtime tag of a buffer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Normal,
    Cyclic,
    Lifo,
    Fifo,
}

impl ModeKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ModeKind::Normal => "Normal",
            ModeKind::Cyclic => "Cyclic",
            ModeKind::Lifo => "Lifo",
            ModeKind::Fifo => "Fifo",
        }
    }

    /// Linear modes stop accepting writes once the buffer is full.
    #[must_use]
    pub const fn is_linear(self) -> bool {
        !matches!(self, ModeKind::Cyclic)
    }

    /// Destructive modes empty the slot they read from.
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, ModeKind::Lifo | ModeKind::Fifo)
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read/write discipline of a buffer.
///
/// This trait is sealed: the four modes of this crate are the only
/// implementors.
pub trait Mode: sealed::Sealed {
    /// Runtime tag of this mode
    const KIND: ModeKind;

    #[doc(hidden)]
    fn write<T>(slots: &mut Slots<T>, value: T) -> Result<&T, BufferError>;

    /// Slot that the next read returns, if any.
    #[doc(hidden)]
    fn read_position<T>(slots: &Slots<T>) -> Option<usize>;

    /// Slot where the logical sequence starts. The sequence walks every slot
    /// once from here, wrapping around the end, and skips empty slots.
    #[doc(hidden)]
    fn start<T>(slots: &Slots<T>) -> usize;

    #[doc(hidden)]
    fn read<T: Clone>(slots: &mut Slots<T>) -> Option<T>;
}

/// Modes whose reads remove the returned element.
pub trait DestructiveMode: Mode {
    #[doc(hidden)]
    fn take<T>(slots: &mut Slots<T>) -> Option<T>;
}

/// Writes until full, then rejects. Reads return the last written element
/// and leave it in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normal;

/// Writes until full, then overwrites starting from the first slot. Reads
/// return the last written element and leave it in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cyclic;

/// Last-in-first-out. Writes until full, then rejects. Reads pop the last
/// written element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifo;

/// First-in-first-out. Writes until full, then rejects. Reads pop the first
/// written element and move the remaining ones one slot towards the front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fifo;

fn write_linear<T>(slots: &mut Slots<T>, value: T, mode: ModeKind) -> Result<&T, BufferError> {
    let at = slots.cursor();
    if slots.is_full() || at >= slots.capacity() {
        #[cfg(feature = "tracing")]
        tracing::debug!(%mode, capacity = slots.capacity(), "buffer full, write rejected");
        return Err(BufferError::CapacityExceeded {
            capacity: slots.capacity(),
            mode,
        });
    }
    slots.set_cursor(at + 1);
    Ok(slots.put(at, value))
}


impl Mode for Normal {
    const KIND: ModeKind = ModeKind::Normal;

    fn write<T>(slots: &mut Slots<T>, value: T) -> Result<&T, BufferError> {
        write_linear(slots, value, Self::KIND)
    }

    fn read_position<T>(slots: &Slots<T>) -> Option<usize> {
        slots.last_before(slots.cursor())
    }

    fn start<T>(slots: &Slots<T>) -> usize {
        slots.cursor()
    }

    fn read<T: Clone>(slots: &mut Slots<T>) -> Option<T> {
        slots.get(Self::read_position(slots)?).cloned()
    }
}

impl Mode for Cyclic {
    const KIND: ModeKind = ModeKind::Cyclic;

    fn write<T>(slots: &mut Slots<T>, value: T) -> Result<&T, BufferError> {
        let at = slots.cursor();
        #[cfg(feature = "tracing")]
        if slots.get(at).is_some() {
            tracing::trace!(slot = at, "cyclic buffer overwrites oldest element");
        }
        slots.set_cursor((at + 1) % slots.capacity());
        Ok(slots.put(at, value))
    }

    fn read_position<T>(slots: &Slots<T>) -> Option<usize> {
        slots.last_before(slots.cursor())
    }

    fn start<T>(slots: &Slots<T>) -> usize {
        slots.cursor()
    }

    fn read<T: Clone>(slots: &mut Slots<T>) -> Option<T> {
        slots.get(Self::read_position(slots)?).cloned()
    }
}

impl Mode for Lifo {
    const KIND: ModeKind = ModeKind::Lifo;

    fn write<T>(slots: &mut Slots<T>, value: T) -> Result<&T, BufferError> {
        write_linear(slots, value, Self::KIND)
    }

    fn read_position<T>(slots: &Slots<T>) -> Option<usize> {
        slots.last_before(slots.cursor())
    }

    fn start<T>(slots: &Slots<T>) -> usize {
        slots.cursor()
    }

    fn read<T: Clone>(slots: &mut Slots<T>) -> Option<T> {
        Self::take(slots)
    }
}

impl DestructiveMode for Lifo {
    fn take<T>(slots: &mut Slots<T>) -> Option<T> {
        let at = Self::read_position(slots)?;
        let value = slots.take(at)?;
        if at < slots.cursor() {
            slots.set_cursor(at);
        }
        Some(value)
    }
}

impl Mode for Fifo {
    const KIND: ModeKind = ModeKind::Fifo;

    fn write<T>(slots: &mut Slots<T>, value: T) -> Result<&T, BufferError> {
        write_linear(slots, value, Self::KIND)
    }

    fn read_position<T>(slots: &Slots<T>) -> Option<usize> {
        slots.first_from(0)
    }

    fn start<T>(_slots: &Slots<T>) -> usize {
        0
    }

    fn read<T: Clone>(slots: &mut Slots<T>) -> Option<T> {
        Self::take(slots)
    }
}

impl DestructiveMode for Fifo {
    fn take<T>(slots: &mut Slots<T>) -> Option<T> {
        let at = Self::read_position(slots)?;
        let value = slots.take(at)?;
        slots.shift_front(at + 1);
        slots.set_cursor(slots.cursor().saturating_sub(1));
        Some(value)
    }
}
