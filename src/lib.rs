#![no_std]

//! A zero-copy, allocation-free path reader for BSON documents.
//!
//! Values are looked up by a path of field names directly from the encoded
//! bytes, without first decoding the document into a tree. Each match is a
//! [`Value`]: a type tag and a span borrowed from the caller's buffer, read
//! on demand through accessors that fall back to zero or empty values on a
//! type mismatch.
//!
//! ```
//! let name = bsonview::get(&bytes, &["user", "name"]).str();
//! let age = bsonview::Value::document(&bytes).get_dotted("user.age").i32();
//! ```
//!
//! Lookups stop at the first match. To receive every match, or to stop
//! early on a condition, use [`get_iter`] with a sink returning
//! [`ControlFlow`](core::ops::ControlFlow). Applications needing finer control
//! over traversal can drive the decoder in the [`raw`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable collection of documents into maps (default).
//! - `chrono`: enable reading date-times and timestamps (default).

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod collect;
mod error;
mod path;
pub mod raw;
mod value;

pub use error::Error;
pub use path::{get, get_iter};
pub use raw::{cursor::Fields, kind::ElementType};
pub use value::Value;
