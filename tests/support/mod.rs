#![allow(dead_code)]

/// A minimal document encoder for building test inputs.
#[derive(Debug, Default, Clone)]
pub struct Doc(Vec<u8>);

impl Doc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with an already-encoded value.
    pub fn raw(mut self, tag: u8, name: &str, value: &[u8]) -> Self {
        self.0.push(tag);
        self.0.extend_from_slice(name.as_bytes());
        self.0.push(0);
        self.0.extend_from_slice(value);
        self
    }

    pub fn f64(self, name: &str, v: f64) -> Self {
        self.raw(0x01, name, &v.to_le_bytes())
    }

    pub fn str(self, name: &str, v: &str) -> Self {
        self.raw(0x02, name, &string(v))
    }

    pub fn doc(self, name: &str, v: Doc) -> Self {
        self.raw(0x03, name, &v.finish())
    }

    pub fn array(self, name: &str, v: Doc) -> Self {
        self.raw(0x04, name, &v.finish())
    }

    pub fn bool(self, name: &str, v: bool) -> Self {
        self.raw(0x08, name, &[v as u8])
    }

    pub fn null(self, name: &str) -> Self {
        self.raw(0x0A, name, &[])
    }

    pub fn i32(self, name: &str, v: i32) -> Self {
        self.raw(0x10, name, &v.to_le_bytes())
    }

    pub fn i64(self, name: &str, v: i64) -> Self {
        self.raw(0x12, name, &v.to_le_bytes())
    }

    /// Frame the elements with a length prefix and terminator.
    pub fn finish(self) -> Vec<u8> {
        let len = (self.0.len() + 5) as i32;

        let mut out = len.to_le_bytes().to_vec();
        out.extend(self.0);
        out.push(0);
        out
    }
}

/// Build an array of `int32` items.
pub fn ints(items: impl IntoIterator<Item = i32>) -> Doc {
    items
        .into_iter()
        .enumerate()
        .fold(Doc::new(), |doc, (i, v)| doc.i32(&i.to_string(), v))
}

/// Encode a string value with its length prefix and terminator.
pub fn string(v: &str) -> Vec<u8> {
    let len = (v.len() + 1) as i32;

    let mut out = len.to_le_bytes().to_vec();
    out.extend_from_slice(v.as_bytes());
    out.push(0);
    out
}
