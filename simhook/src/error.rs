use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CallbackError {
    /// Position outside the callback list
    #[error("Index out of range: index {index} is beyond callback list length {length}")]
    IndexOutOfRange {
        /// Position that was requested
        index: usize,
        /// Length of the callback list
        length: usize,
    },
}

pub type Result<T> = core::result::Result<T, CallbackError>;
