//! Errors raised while traversing a document.

use thiserror::Error;

use crate::ElementType;

/// An error traversing a document or array.
///
/// Reading a value as the wrong type is never an error; accessors on
/// [`crate::Value`] fall back to a zero or empty value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A declared length does not fit in the buffer, or an element inside a
    /// container could not be decoded.
    #[error("Invalid length after {consumed} bytes of elements.")]
    InvalidLength {
        /// Bytes of complete elements decoded before the failure.
        consumed: usize,
    },
    /// Traversal attempted on a value that is neither a document nor an array.
    #[error("Cannot traverse a value of type {0:?}.")]
    NotContainer(ElementType),
    /// A document-only or array-only helper was given the other container.
    #[error("Expected a value of type {expected:?}, found {found:?}.")]
    UnexpectedType {
        expected: ElementType,
        found: ElementType,
    },
    /// A field name is not valid UTF-8.
    #[error("Field name is not valid UTF-8.")]
    InvalidName,
}
