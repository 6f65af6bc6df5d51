use alloc::boxed::Box;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

pub type BoxedCondition<T> = Box<dyn Fn(&T) -> bool>;
pub type BoxedAction<T> = Box<dyn Fn(&T)>;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token of a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

impl CallbackId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Draws a token that no other call in this process has returned.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CallbackId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A condition/action pair invoked with a single argument, usually the object
/// that owns the callback.
///
/// Calling an enabled callback evaluates the condition and, if it holds, runs
/// the action with the same argument. Actions that need to change the
/// argument go through interior mutability (`Cell`, `RefCell`).
pub struct Callback<T> {
    condition: BoxedCondition<T>,
    action: BoxedAction<T>,
    enabled: bool,
    id: CallbackId,
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Callback {{ id: {}, enabled: {}, condition: <fn>, action: <fn> }}",
            self.id, self.enabled
        )
    }
}

impl<T> Callback<T> {
    /// Creates an enabled callback with a fresh identity token.
    #[must_use]
    pub fn new<C, A>(condition: C, action: A) -> Self
    where
        C: Fn(&T) -> bool + 'static,
        A: Fn(&T) + 'static,
    {
        Self::with_id(condition, action, CallbackId::next())
    }

    /// Creates an enabled callback with a caller-chosen identity token.
    #[must_use]
    pub fn with_id<C, A>(condition: C, action: A, id: impl Into<CallbackId>) -> Self
    where
        C: Fn(&T) -> bool + 'static,
        A: Fn(&T) + 'static,
    {
        Self {
            condition: Box::new(condition),
            action: Box::new(action),
            enabled: true,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CallbackId {
        self.id
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs the action if the callback is enabled and its condition holds
    /// for `arg`. Returns whether the action ran.
    pub fn call(&self, arg: &T) -> bool {
        if !self.enabled || !(self.condition)(arg) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(id = self.id.get(), "callback condition holds, running action");
        (self.action)(arg);
        true
    }
}
