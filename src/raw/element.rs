//! Decoding of a single encoded element.
//!
//! An element is laid out as a type tag, a zero-terminated name, and a value
//! whose length is fixed by the type or read from a little-endian prefix.

use memchr::memchr;
use thiserror::Error;
use zerocopy::{FromBytes, byteorder::little_endian::I32};

use crate::Value;

use super::kind::ElementType;

/// An error decoding a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ElementError {
    /// No bytes remain to decode.
    #[error("No bytes remain.")]
    Empty,
    /// The leading byte is not a known type tag.
    #[error("Unknown element type ({0:#04x}).")]
    InvalidType(u8),
    /// The name has no zero terminator.
    #[error("Unterminated element name.")]
    UnterminatedName,
    /// The value does not fit in the remaining bytes.
    #[error("Element value overruns the buffer.")]
    InvalidLength,
}

/// A decoded element, borrowing from the bytes it was decoded from.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    /// Field name, without its terminator.
    pub name: &'a [u8],
    /// Typed view of the value bytes.
    pub value: Value<'a>,
    /// Number of bytes the whole element occupies.
    pub len: usize,
}

/// Decode the element beginning at the first byte of a slice.
///
/// Bytes after the element are ignored.
pub fn decode(r: &[u8]) -> Result<Element<'_>, ElementError> {
    let (&tag, r) = r.split_first().ok_or(ElementError::Empty)?;
    let kind = ElementType::from_tag(tag).ok_or(ElementError::InvalidType(tag))?;

    let (name, r) = take_cstring(r).ok_or(ElementError::UnterminatedName)?;

    let size = value_len(kind, r)?;
    let raw = r.get(..size).ok_or(ElementError::InvalidLength)?;

    Ok(Element {
        name,
        value: Value::new(kind, raw),
        len: 1 + name.len() + 1 + size,
    })
}

/// Compute the length of a value of a given type from its leading bytes.
fn value_len(kind: ElementType, r: &[u8]) -> Result<usize, ElementError> {
    use ElementType::*;

    let size = match kind {
        Undefined | Null | MinKey | MaxKey => 0,
        Boolean => 1,
        Int32 => 4,
        Double | DateTime | Timestamp | Int64 => 8,
        ObjectId => 12,
        Decimal128 => 16,
        // The prefix counts the string and its terminator, but not itself.
        String | JavaScript | Symbol => length_prefix(r)? + 4,
        // The prefix counts the whole value, itself included.
        Document | Array | JavaScriptWithScope => length_prefix(r)?,
        Binary => length_prefix(r)? + 4 + 1,
        DbPointer => length_prefix(r)? + 4 + 12,
        Regex => {
            let (pattern, rest) = take_cstring(r).ok_or(ElementError::InvalidLength)?;
            let (options, _) = take_cstring(rest).ok_or(ElementError::InvalidLength)?;
            pattern.len() + 1 + options.len() + 1
        }
    };

    Ok(size)
}

/// Read a little-endian `int32` length, rejecting negative values.
pub(crate) fn length_prefix(r: &[u8]) -> Result<usize, ElementError> {
    let (len, _) = I32::read_from_prefix(r).map_err(|_| ElementError::InvalidLength)?;

    usize::try_from(len.get()).map_err(|_| ElementError::InvalidLength)
}

/// Split a zero-terminated string from the front of a slice.
///
/// Returns the string without its terminator, and the bytes following it.
pub(crate) fn take_cstring(r: &[u8]) -> Option<(&[u8], &[u8])> {
    let end = memchr(0, r)?;

    Some((&r[..end], &r[end + 1..]))
}
