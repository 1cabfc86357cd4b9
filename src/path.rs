//! Lookup of nested values by a path of field names.
//!
//! Lookups walk the document depth-first, scanning each container's fields in
//! encoded order and descending only into those whose name matches the path
//! segment for that depth. No index is built, so unmatched siblings are still
//! scanned element-by-element.

use core::ops::ControlFlow::{self, Break, Continue};

use either::Either::{Left, Right};

use crate::{Error, Value, raw::cursor::Cursor};

impl<'a> Value<'a> {
    /// Get the first value at a path below this one.
    ///
    /// Returns [`Value::UNDEFINED`] if nothing matches, or if the document is
    /// malformed before a match is found. An empty path returns this value.
    pub fn get<S: AsRef<[u8]>>(&self, path: &[S]) -> Value<'a> {
        first(*self, path.iter())
    }

    /// Get the first value at a `.`-separated path below this one.
    ///
    /// Behaves as [`Value::get`] with the path split on each `.`. An empty
    /// string returns this value.
    pub fn get_dotted(&self, path: &str) -> Value<'a> {
        first(*self, path.split_terminator('.'))
    }

    /// Publish every value at a path below this one to a sink, until the sink
    /// breaks.
    ///
    /// Matches are published in depth-first encoded order. Fields with
    /// duplicate names are each followed. Intermediate matches that are not
    /// documents or arrays are skipped.
    pub fn get_iter<S: AsRef<[u8]>>(
        &self,
        path: &[S],
        mut sink: impl FnMut(Value<'a>) -> ControlFlow<()>,
    ) -> Result<(), Error> {
        resolve(*self, path.iter(), &mut sink).map(drop)
    }
}

/// Get the first value at a path in an encoded document.
///
/// See [`Value::get`].
pub fn get<'a, S: AsRef<[u8]>>(r: &'a [u8], path: &[S]) -> Value<'a> {
    Value::document(r).get(path)
}

/// Publish every value at a path in an encoded document to a sink.
///
/// See [`Value::get_iter`].
pub fn get_iter<'a, S: AsRef<[u8]>>(
    r: &'a [u8],
    path: &[S],
    sink: impl FnMut(Value<'a>) -> ControlFlow<()>,
) -> Result<(), Error> {
    Value::document(r).get_iter(path, sink)
}

fn first<'a, I, S>(root: Value<'a>, path: I) -> Value<'a>
where
    I: Iterator<Item = S> + Clone,
    S: AsRef<[u8]>,
{
    let mut found: Value<'a> = Value::UNDEFINED;

    // Errors are not reported; a walk that fails before a match yields
    // `UNDEFINED`.
    let _ = resolve(root, path, &mut |value| {
        found = value;
        Break(())
    });

    found
}

/// Walk a container, publishing values at the remaining path to the sink.
///
/// Returns `Break` once the sink has broken, so callers unwind without
/// visiting further siblings.
fn resolve<'a, I, S>(
    container: Value<'a>,
    mut path: I,
    sink: &mut impl FnMut(Value<'a>) -> ControlFlow<()>,
) -> Result<ControlFlow<()>, Error>
where
    I: Iterator<Item = S> + Clone,
    S: AsRef<[u8]>,
{
    let Some(segment) = path.next() else {
        return Ok(sink(container));
    };
    let segment = segment.as_ref();
    let is_leaf = path.clone().next().is_none();

    let mut cursor = Cursor::open(container)?;

    loop {
        let (element, successor) = match cursor.advance()? {
            Left(step) => step,
            Right(_) => return Ok(Continue(())),
        };
        cursor = successor;

        if element.name != segment {
            continue;
        }

        let flow = if is_leaf {
            sink(element.value)
        } else if element.value.kind().is_container() {
            resolve(element.value, path.clone(), sink).inspect_err(|err| {
                log::debug!("abandoned lookup below a matched field: {err}");
            })?
        } else {
            Continue(())
        };

        if flow.is_break() {
            return Ok(Break(()));
        }
    }
}
