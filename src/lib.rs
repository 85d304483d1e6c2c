//! A single threaded, zero dependency stack-ended queue.
//!
//! A [`Steque`] supports `push` and `pop` at the front, like a stack, and `enqueue`
//! at the back, like a queue. Iteration always runs front to back.
//!
//! ```rust
//! use steque::{Error, Steque};
//!
//! let mut steque = Steque::new();
//! steque.push(1);
//! steque.push(2);
//! steque.enqueue(3);
//!
//! assert_eq!(steque.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
//! assert_eq!(steque.pop(), Ok(2));
//! assert_eq!(steque.len(), 2);
//!
//! let mut empty: Steque<i32> = Steque::new();
//! assert_eq!(empty.pop(), Err(Error::EmptyContainer));
//! ```

pub mod steque;

pub use crate::steque::{IntoIter, Iter, Steque};

/// Errors returned by [`Steque`] operations
///
/// Both variants report a broken precondition on the caller's side. The steque is
/// left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `pop` was called on an empty steque
    EmptyContainer,
    /// `try_next` was called on an iterator with nothing left
    ExhaustedIterator,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "steque is empty"),
            Error::ExhaustedIterator => write!(f, "iterator is exhausted"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for steque operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::EmptyContainer.to_string(), "steque is empty");
        assert_eq!(Error::ExhaustedIterator.to_string(), "iterator is exhausted");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::EmptyContainer);
        assert_eq!(err.to_string(), "steque is empty");
    }
}
