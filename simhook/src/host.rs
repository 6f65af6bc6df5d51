//! Hosts: objects that own a callback list and pass themselves to it.

use crate::callback::Callback;
use crate::error::Result;
use crate::list::CallbackList;

/// An object that owns a list of callbacks taking the object itself as
/// argument.
pub trait HasCallbacks: Sized {
    fn callbacks(&self) -> &CallbackList<Self>;

    fn callbacks_mut(&mut self) -> &mut CallbackList<Self>;

    /// Calls every callback of the host with the host itself and returns how
    /// many actions ran.
    fn run_callbacks(&self) -> usize {
        self.callbacks().call(self)
    }
}

/// Adds `callback` to the callback list of `host`, at position `priority` or
/// at the end when `priority` is `None`.
///
/// # Errors
///
/// Returns `CallbackError::IndexOutOfRange` if `priority` is greater than the
/// list length.
pub fn add_callback<H: HasCallbacks>(
    host: &mut H,
    callback: Callback<H>,
    priority: Option<usize>,
) -> Result<()> {
    host.callbacks_mut().insert(callback, priority)
}

/// Deletes the callback at `index` from the callback list of `host` and
/// returns it.
///
/// # Errors
///
/// Returns `CallbackError::IndexOutOfRange` if `index` is out of range. The
/// list is left unchanged.
pub fn delete_callback<H: HasCallbacks>(host: &mut H, index: usize) -> Result<Callback<H>> {
    host.callbacks_mut().remove(index)
}
