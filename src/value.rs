//! Typed, zero-copy views of encoded values.

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use zerocopy::{
    FromBytes,
    byteorder::little_endian::{F64, I32, I64},
};

use crate::{
    ElementType,
    raw::{cursor::Fields, element::take_cstring},
};

/// A view of one encoded value, borrowing from the buffer it was decoded from.
///
/// For scalars, the view spans exactly the value bytes. For documents and
/// arrays, it spans the whole encoded container, so a view is also a root for
/// further lookups.
///
/// Accessors never fail: reading a value as an incompatible type returns a
/// zero or empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<'a> {
    kind: ElementType,
    raw: &'a [u8],
}

impl Value<'static> {
    /// The view returned when nothing matches.
    pub const UNDEFINED: Self = Self {
        kind: ElementType::Undefined,
        raw: &[],
    };
}

impl<'a> Value<'a> {
    pub(crate) fn new(kind: ElementType, raw: &'a [u8]) -> Self {
        Self { kind, raw }
    }

    /// View a buffer as an encoded document.
    ///
    /// Nothing is read until the view is traversed.
    pub fn document(r: &'a [u8]) -> Self {
        Self::new(ElementType::Document, r)
    }

    /// The type of this value.
    pub fn kind(&self) -> ElementType {
        self.kind
    }

    /// The bytes spanned by this value.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Iterate over the `(name, value)` fields of a document or array.
    pub fn fields(&self) -> Fields<'a> {
        Fields::new(*self)
    }

    /// Whether a value was found. Explicit nulls exist.
    pub fn exists(&self) -> bool {
        self.kind != ElementType::Undefined
    }

    /// Read a boolean. Anything but a stored `true` reads as `false`.
    pub fn bool(&self) -> bool {
        self.kind == ElementType::Boolean && matches!(self.raw, [0x01])
    }

    /// Read a numeric value as an `i32`.
    ///
    /// 64-bit integers wrap, and doubles truncate toward zero (saturating).
    pub fn i32(&self) -> i32 {
        match self.kind {
            ElementType::Int32 => self.read::<I32>().map_or(0, |v| v.get()),
            ElementType::Int64 => self.i64() as i32,
            ElementType::Double => self.f64() as i32,
            _ => 0,
        }
    }

    /// Read a numeric value as an `i64`.
    ///
    /// Doubles truncate toward zero (saturating).
    pub fn i64(&self) -> i64 {
        match self.kind {
            ElementType::Int64 => self.read::<I64>().map_or(0, |v| v.get()),
            ElementType::Int32 => self.i32().into(),
            ElementType::Double => self.f64() as i64,
            _ => 0,
        }
    }

    /// Read a numeric value as an `f64`.
    pub fn f64(&self) -> f64 {
        match self.kind {
            ElementType::Double => self.read::<F64>().map_or(0.0, |v| v.get()),
            ElementType::Int32 => self.i32().into(),
            ElementType::Int64 => self.i64() as f64,
            _ => 0.0,
        }
    }

    /// Read a string, or `""` if this is not a valid UTF-8 string.
    pub fn str(&self) -> &'a str {
        core::str::from_utf8(self.string_bytes()).unwrap_or_default()
    }

    /// Read the bytes of a string without checking their encoding.
    pub fn string_bytes(&self) -> &'a [u8] {
        self.text(ElementType::String).unwrap_or_default()
    }

    /// Read the source of a JavaScript code value.
    pub fn js_code(&self) -> Option<&'a str> {
        core::str::from_utf8(self.text(ElementType::JavaScript)?).ok()
    }

    /// Read a symbol.
    pub fn symbol(&self) -> Option<&'a str> {
        core::str::from_utf8(self.text(ElementType::Symbol)?).ok()
    }

    /// Read a date-time or timestamp as a point in time, or the Unix epoch for
    /// other types.
    ///
    /// _Requires Cargo feature `chrono`._
    #[cfg(feature = "chrono")]
    pub fn time(&self) -> DateTime<Utc> {
        let time = match self.kind {
            ElementType::DateTime => self
                .read::<I64>()
                .and_then(|ms| DateTime::from_timestamp_millis(ms.get())),
            ElementType::Timestamp => self
                .timestamp()
                .and_then(|(seconds, _)| DateTime::from_timestamp(seconds.into(), 0)),
            _ => None,
        };

        time.unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Read a timestamp as its seconds and increment.
    pub fn timestamp(&self) -> Option<(u32, u32)> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Timestamp {
            increment: [u8; 4],
            seconds: [u8; 4],
        }

        if self.kind != ElementType::Timestamp {
            return None;
        }

        let r: [u8; 8] = self.raw.try_into().ok()?;
        let Timestamp { increment, seconds } = zerocopy::transmute!(r);

        Some((u32::from_le_bytes(seconds), u32::from_le_bytes(increment)))
    }

    /// Read the 12 bytes of an object identifier.
    pub fn object_id(&self) -> Option<[u8; 12]> {
        match self.kind {
            ElementType::ObjectId => self.raw.try_into().ok(),
            _ => None,
        }
    }

    /// Read a binary value as its subtype and payload.
    pub fn binary(&self) -> Option<(u8, &'a [u8])> {
        if self.kind != ElementType::Binary {
            return None;
        }

        let (subtype, payload) = self.raw.get(4..)?.split_first()?;

        Some((*subtype, payload))
    }

    /// Read a regular expression as its pattern and options.
    pub fn regex(&self) -> Option<(&'a str, &'a str)> {
        if self.kind != ElementType::Regex {
            return None;
        }

        let (pattern, r) = take_cstring(self.raw)?;
        let (options, _) = take_cstring(r)?;

        Some((
            core::str::from_utf8(pattern).ok()?,
            core::str::from_utf8(options).ok()?,
        ))
    }

    /// Read the whole span as a fixed-size little-endian primitive.
    fn read<T: FromBytes>(&self) -> Option<T> {
        T::read_from_bytes(self.raw).ok()
    }

    /// Strip the length prefix and terminator from a string-like value.
    fn text(&self, kind: ElementType) -> Option<&'a [u8]> {
        if self.kind != kind {
            return None;
        }

        self.raw.get(4..self.raw.len().checked_sub(1)?)
    }
}
