use alloc::vec::Vec;
use core::fmt;

use crate::callback::{Callback, CallbackId};
use crate::error::{CallbackError, Result};

/// Ordered list of callbacks sharing one argument type.
///
/// Callbacks run in list order. Position 0 runs first, so inserting at a
/// lower position gives a callback higher priority.
pub struct CallbackList<T> {
    callbacks: Vec<Callback<T>>,
}

impl<T> Default for CallbackList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CallbackList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.callbacks).finish()
    }
}

impl<T> CallbackList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Callback<T>> {
        self.callbacks.get(index)
    }

    /// Mutable access, e.g. to enable or disable a single entry.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Callback<T>> {
        self.callbacks.get_mut(index)
    }

    /// Position of the callback with the given identity token.
    #[must_use]
    pub fn position(&self, id: CallbackId) -> Option<usize> {
        self.callbacks.iter().position(|callback| callback.id() == id)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Callback<T>> {
        self.callbacks.iter()
    }

    /// Appends a callback at the end of the list.
    pub fn push(&mut self, callback: Callback<T>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(id = callback.id().get(), position = self.len(), "callback added");
        self.callbacks.push(callback);
    }

    /// Inserts a callback at position `priority`, or appends it when
    /// `priority` is `None`. Entries at and after the position move back by
    /// one.
    ///
    /// # Errors
    ///
    /// Returns `CallbackError::IndexOutOfRange` if `priority` is greater than
    /// the list length. The list is left unchanged.
    pub fn insert(&mut self, callback: Callback<T>, priority: Option<usize>) -> Result<()> {
        let Some(index) = priority else {
            self.push(callback);
            return Ok(());
        };
        if index > self.len() {
            return Err(CallbackError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(id = callback.id().get(), position = index, "callback inserted");
        self.callbacks.insert(index, callback);
        Ok(())
    }

    /// Removes and returns the callback at `index`. Later entries move
    /// forward by one.
    ///
    /// # Errors
    ///
    /// Returns `CallbackError::IndexOutOfRange` if `index` is not below the
    /// list length. The list is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<Callback<T>> {
        if index >= self.len() {
            return Err(CallbackError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }
        let callback = self.callbacks.remove(index);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = callback.id().get(), position = index, "callback deleted");
        Ok(callback)
    }

    /// Calls every callback with `arg`, in list order, and returns how many
    /// actions ran.
    pub fn call(&self, arg: &T) -> usize {
        let mut fired = 0;
        for callback in &self.callbacks {
            if callback.call(arg) {
                fired += 1;
            }
        }
        fired
    }
}

impl<T> FromIterator<Callback<T>> for CallbackList<T> {
    fn from_iter<I: IntoIterator<Item = Callback<T>>>(iter: I) -> Self {
        Self {
            callbacks: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Callback<T>> for CallbackList<T> {
    fn extend<I: IntoIterator<Item = Callback<T>>>(&mut self, iter: I) {
        self.callbacks.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a CallbackList<T> {
    type Item = &'a Callback<T>;
    type IntoIter = core::slice::Iter<'a, Callback<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.callbacks.iter()
    }
}
