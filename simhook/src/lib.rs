#![no_std]

//! Condition/action callbacks for monitoring objects.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! A [`Callback`] pairs a condition and an action, both taking a single
//! argument. Callbacks are usually fields of the object they monitor and are
//! called with that object:
//!
//! ```
//! use std::cell::Cell;
//! use simhook::Callback;
//!
//! struct TestObject {
//!     x: Cell<i32>,
//!     callback: Callback<TestObject>,
//! }
//!
//! let testobject = TestObject {
//!     x: Cell::new(-1),
//!     callback: Callback::new(|obj: &TestObject| obj.x.get() > 0, |obj| obj.x.set(0)),
//! };
//!
//! assert!(!testobject.callback.call(&testobject)); // condition is false
//! testobject.x.set(3);
//! assert!(testobject.callback.call(&testobject)); // action runs
//! assert_eq!(testobject.x.get(), 0);
//! ```
//!
//! Objects that hold several callbacks keep them in a [`CallbackList`] and
//! implement [`HasCallbacks`]:
//!
//! ```
//! use simhook::{add_callback, delete_callback, Callback, CallbackList, HasCallbacks};
//!
//! struct Object {
//!     x: i32,
//!     callbacks: CallbackList<Object>,
//! }
//!
//! impl HasCallbacks for Object {
//!     fn callbacks(&self) -> &CallbackList<Self> {
//!         &self.callbacks
//!     }
//!
//!     fn callbacks_mut(&mut self) -> &mut CallbackList<Self> {
//!         &mut self.callbacks
//!     }
//! }
//!
//! let mut obj = Object { x: 5, callbacks: CallbackList::new() };
//! add_callback(&mut obj, Callback::new(|o: &Object| o.x == 5, |_| {}), None).unwrap();
//! add_callback(&mut obj, Callback::new(|_: &Object| false, |_| {}), None).unwrap();
//! assert_eq!(obj.run_callbacks(), 1);
//!
//! delete_callback(&mut obj, 1).unwrap();
//! assert_eq!(obj.callbacks.len(), 1);
//! ```

extern crate alloc;

pub mod callback;
pub mod error;
pub mod host;
pub mod list;

pub use callback::{BoxedAction, BoxedCondition, Callback, CallbackId};
pub use error::CallbackError;
pub use host::{add_callback, delete_callback, HasCallbacks};
pub use list::CallbackList;
