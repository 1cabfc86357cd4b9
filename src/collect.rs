//! Traversal and collection of a container's immediate children.

use alloc::vec::Vec;
use core::ops::ControlFlow;

#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{ElementType, Error, Value, raw::cursor};

impl<'a> Value<'a> {
    /// Visit each field of a document or array until the visitor breaks.
    ///
    /// Returns the number of element bytes consumed.
    pub fn iter_fields(
        &self,
        visit: impl FnMut(&'a [u8], Value<'a>) -> ControlFlow<()>,
    ) -> Result<usize, Error> {
        let (ControlFlow::Continue(consumed) | ControlFlow::Break(consumed)) =
            cursor::walk(*self, visit)?;

        Ok(consumed)
    }

    /// Visit each item of an array until the visitor breaks.
    pub fn iter_array(
        &self,
        mut visit: impl FnMut(Value<'a>) -> ControlFlow<()>,
    ) -> Result<(), Error> {
        self.require(ElementType::Array)?;

        self.iter_fields(|_, value| visit(value)).map(drop)
    }

    /// Visit each field of a document until the visitor breaks.
    pub fn iter_document(
        &self,
        mut visit: impl FnMut(&'a str, Value<'a>) -> ControlFlow<()>,
    ) -> Result<(), Error> {
        self.require(ElementType::Document)?;

        for field in self.fields() {
            let (name, value) = field?;
            let name = core::str::from_utf8(name).map_err(|_| Error::InvalidName)?;

            if visit(name, value).is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Count the immediate children of a document or array.
    ///
    /// Scalars have no children. For malformed containers, only the elements
    /// decoded before the failure are counted.
    pub fn len(&self) -> usize {
        let mut count = 0;

        let _ = cursor::walk(*self, |_, _| {
            count += 1;
            ControlFlow::Continue(())
        });

        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collect the items of an array.
    pub fn to_vec(&self) -> Result<Vec<Value<'a>>, Error> {
        self.to_vec_sized(0)
    }

    /// Collect the items of an array into a vector with a capacity hint.
    ///
    /// A hint of zero counts the items first.
    pub fn to_vec_sized(&self, capacity: usize) -> Result<Vec<Value<'a>>, Error> {
        self.require(ElementType::Array)?;

        let mut items = Vec::with_capacity(hint(self, capacity));

        self.iter_array(|value| {
            items.push(value);
            ControlFlow::Continue(())
        })?;

        Ok(items)
    }

    /// Collect the fields of a document by name.
    ///
    /// Where names repeat, the last field wins.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn to_map(&self) -> Result<HashMap<&'a str, Value<'a>>, Error> {
        self.to_map_sized(0)
    }

    /// Collect the fields of a document by name into a map with a capacity
    /// hint.
    ///
    /// A hint of zero counts the fields first.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn to_map_sized(&self, capacity: usize) -> Result<HashMap<&'a str, Value<'a>>, Error> {
        self.require(ElementType::Document)?;

        let mut fields = HashMap::with_capacity(hint(self, capacity));

        self.iter_document(|name, value| {
            fields.insert(name, value);
            ControlFlow::Continue(())
        })?;

        Ok(fields)
    }

    fn require(&self, expected: ElementType) -> Result<(), Error> {
        match self.kind() {
            kind if kind == expected => Ok(()),
            kind if kind.is_container() => Err(Error::UnexpectedType {
                expected,
                found: kind,
            }),
            kind => Err(Error::NotContainer(kind)),
        }
    }
}

fn hint(container: &Value<'_>, capacity: usize) -> usize {
    match capacity {
        0 => container.len(),
        // The smallest element is a tag and an empty name.
        n => n.min(container.raw().len() / 2),
    }
}
