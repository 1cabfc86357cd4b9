//! Field-by-field traversal of a container.
//!
//! A [`Cursor`] is a consumable token positioned between two elements of a
//! document or array. Calling [`Cursor::advance`] decodes the next element and
//! returns it with a successor token, or reports that the container has been
//! exhausted. Fields are produced strictly in encoded order; duplicate names
//! are each produced.

use core::ops::ControlFlow;

use either::Either::{self, Left, Right};

use crate::{Error, Value};

use super::element::{self, Element, length_prefix};

/// State token to decode the next element of a container.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    rest: &'a [u8],
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// Position a cursor before the first element of a document or array.
    ///
    /// Fails if the value is not a container, or if its declared length does
    /// not fit in its bytes.
    pub fn open(container: Value<'a>) -> Result<Self, Error> {
        let kind = container.kind();
        if !kind.is_container() {
            Err(Error::NotContainer(kind))?;
        }

        let r = container.raw();

        // Room is needed for the prefix and terminator at least.
        let end = length_prefix(r)
            .ok()
            .filter(|len| (5..=r.len()).contains(len))
            .ok_or_else(|| {
                log::trace!("container of {} bytes has a bad length prefix", r.len());
                Error::InvalidLength { consumed: 0 }
            })?;

        Ok(Self {
            rest: &r[4..end - 1],
            consumed: 0,
        })
    }

    /// Transition by decoding the next element.
    ///
    /// Returns the element and a successor token, or the number of element
    /// bytes consumed if none remain.
    pub fn advance(self) -> Result<Either<(Element<'a>, Self), usize>, Error> {
        if self.rest.is_empty() {
            return Ok(Right(self.consumed));
        }

        let element = element::decode(self.rest).map_err(|cause| {
            log::trace!("stopped after {} bytes of elements: {cause}", self.consumed);
            Error::InvalidLength {
                consumed: self.consumed,
            }
        })?;

        let successor = Self {
            rest: &self.rest[element.len..],
            consumed: self.consumed + element.len,
        };

        Ok(Left((element, successor)))
    }
}

/// Visit each field of a container until the visitor breaks.
///
/// Returns `Break` if the visitor stopped the walk and `Continue` if every
/// field was visited, each carrying the number of element bytes consumed.
pub fn walk<'a>(
    container: Value<'a>,
    mut visit: impl FnMut(&'a [u8], Value<'a>) -> ControlFlow<()>,
) -> Result<ControlFlow<usize, usize>, Error> {
    let mut cursor = Cursor::open(container)?;

    loop {
        let (element, successor) = match cursor.advance()? {
            Left(step) => step,
            Right(consumed) => return Ok(ControlFlow::Continue(consumed)),
        };

        if visit(element.name, element.value).is_break() {
            return Ok(ControlFlow::Break(successor.consumed));
        }

        cursor = successor;
    }
}

/// An iterator over the `(name, value)` fields of a container.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    state: Option<Result<Cursor<'a>, Error>>,
}

impl<'a> Fields<'a> {
    /// Iterate over a document or array, yielding an error if it cannot be opened.
    pub fn new(container: Value<'a>) -> Self {
        Self {
            state: Some(Cursor::open(container)),
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<(&'a [u8], Value<'a>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = match self.state.take()? {
            Ok(cursor) => cursor,
            Err(err) => return Some(Err(err)),
        };

        match cursor.advance() {
            Ok(Left((element, successor))) => {
                self.state = Some(Ok(successor));
                Some(Ok((element.name, element.value)))
            }
            Ok(Right(_)) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
