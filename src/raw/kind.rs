//! The closed set of element type tags.

use zerocopy::TryFromBytes;

/// The type tag leading every encoded element.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum ElementType {
    /// 64-bit binary floating point.
    Double = 0x01,
    /// Length-prefixed, zero-terminated UTF-8 string.
    String = 0x02,
    /// Embedded document.
    Document = 0x03,
    /// Embedded document with decimal-string keys.
    Array = 0x04,
    /// Length-prefixed binary payload with a subtype byte.
    Binary = 0x05,
    /// Deprecated. Also used as the "no value" sentinel.
    Undefined = 0x06,
    /// 12-byte object identifier.
    ObjectId = 0x07,
    Boolean = 0x08,
    /// Milliseconds since the Unix epoch.
    DateTime = 0x09,
    Null = 0x0A,
    /// Pattern and options, both zero-terminated.
    Regex = 0x0B,
    /// Deprecated.
    DbPointer = 0x0C,
    JavaScript = 0x0D,
    /// Deprecated.
    Symbol = 0x0E,
    /// Deprecated.
    JavaScriptWithScope = 0x0F,
    Int32 = 0x10,
    /// Internal replication timestamp.
    Timestamp = 0x11,
    Int64 = 0x12,
    Decimal128 = 0x13,
    MaxKey = 0x7F,
    MinKey = 0xFF,
}

impl ElementType {
    /// Interpret a tag byte, if it names a known type.
    pub fn from_tag(tag: u8) -> Option<Self> {
        zerocopy::try_transmute!(tag).ok()
    }

    /// Whether elements of this type can be traversed field-by-field.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Document | Self::Array)
    }
}
