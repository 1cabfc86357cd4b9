//! Low-level decoding of elements and containers.
//!
//! This module is intended for applications that need to drive traversal
//! themselves. Most users should begin with [`crate::get`] and the methods on
//! [`crate::Value`].
//!
//! # Architecture
//!
//! [`element::decode`] interprets the bytes at the front of a slice as one
//! element, computing its value span from type-specific layout rules. A
//! [`cursor::Cursor`] repeatedly decodes elements from the interior of a
//! document or array, advancing by each element's length. Every length read
//! from the buffer is checked against the bytes actually present, so malformed
//! input ends traversal with an error rather than an out-of-range read.

pub mod cursor;
pub mod element;
pub mod kind;
