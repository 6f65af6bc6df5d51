#![no_std]

//! `Buffer`: a fixed-capacity container whose read/write behavior is set by a mode.
//!
//! A `Buffer<T, M>` owns a backing store of `capacity` optional slots that is
//! allocated once and never resized. Every slot starts empty. The mode `M`
//! decides what happens when the store is full and which element a read
//! returns:
//!
//! - [`Normal`]: writes until full, then rejects writes. Reads return the last
//!   written element and keep it.
//! - [`Cyclic`]: writes until full, then overwrites starting from the first
//!   slot. Reads return the last written element and keep it.
//! - [`Lifo`]: writes until full, then rejects writes. Reads pop the last
//!   written element.
//! - [`Fifo`]: writes until full, then rejects writes. Reads pop the first
//!   written element.
//!
//! The default element type is `f64` and the default mode is `Cyclic`.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Performance Characteristics
//!
//! - `write()`: O(1)
//! - `read()`: O(1), except `Fifo` which moves the remaining elements, O(n)
//!   and reads that have to skip empty slots left by direct assignment
//! - `is_empty()`, `is_full()`: O(1), occupancy is tracked incrementally
//! - `content()`, iteration: O(n)
//!
//! # Writing and Reading
//!
//! ```
//! # use simbuf::{Buffer, Fifo, Normal};
//! let mut buf = Buffer::<f64, Fifo>::new(3).unwrap();
//! for val in [1.0, 2.0, 3.0] {
//!     buf.write(val).unwrap();
//! }
//! assert!(buf.is_full());
//! assert!(buf.write(4.0).is_err());
//!
//! assert_eq!(buf.read().unwrap(), 1.0);
//! assert_eq!(buf.as_slots(), &[Some(2.0), Some(3.0), None]);
//!
//! let mut normal = Buffer::<i32, Normal>::new(2).unwrap();
//! normal.write(7).unwrap();
//! assert_eq!(normal.read().unwrap(), 7);
//! assert_eq!(normal.read().unwrap(), 7); // Normal reads do not consume
//! ```
//!
//! # Cyclic Overwrite
//!
//! ```
//! # use simbuf::{Buffer, ContentOrder};
//! let mut buf: Buffer = Buffer::new(3).unwrap();
//! assert_eq!(buf.fill(1.0).unwrap(), 3);
//! buf.write(3.0).unwrap();
//! buf.write(4.0).unwrap();
//!
//! assert_eq!(buf.as_slots(), &[Some(3.0), Some(4.0), Some(1.0)]);
//! assert_eq!(buf.content(ContentOrder::OldestFirst), vec![1.0, 3.0, 4.0]);
//! assert_eq!(buf.content(ContentOrder::NewestFirst), vec![4.0, 3.0, 1.0]);
//! ```
//!
//! # Slot Access
//!
//! The backing slots can be read and assigned directly, independent of the
//! mode. Direct assignment does not move the write position.
//!
//! ```
//! # use simbuf::Buffer;
//! let mut buf: Buffer = Buffer::new(5).unwrap();
//! for val in 1..=5 {
//!     buf.write(f64::from(2 * val)).unwrap();
//! }
//! assert_eq!(buf[0], Some(2.0));
//! assert_eq!(buf.last_slot(), Some(&10.0));
//! assert_eq!(buf.slots(2..4).unwrap(), &[Some(6.0), Some(8.0)]);
//!
//! buf.set(0, 5.0).unwrap();
//! buf.set_range(2..5, [7.0, 8.0, 9.0]).unwrap();
//! assert!(buf.set_range(2..5, [1.0]).is_err());
//! assert_eq!(buf.get(4), Some(&9.0));
//! ```
//!
//! # Diagnostics
//!
//! ```
//! # use simbuf::Buffer;
//! let buf: Buffer = Buffer::new(3).unwrap();
//! assert_eq!(
//!     buf.to_string(),
//!     "Buffer(mode:Cyclic, eltype:f64, length:3, index:0, state:empty)"
//! );
//! ```

extern crate alloc;

mod buffer;
mod error;
mod iter;
pub mod mode;
mod store;

// Re-export public types and traits
pub use buffer::{Buffer, BufferState, BufferSummary, ContentOrder};
pub use error::BufferError;
pub use iter::BufferIter;
pub use mode::{Cyclic, DestructiveMode, Fifo, Lifo, Mode, ModeKind, Normal};
#[doc(hidden)]
pub use store::Slots;
