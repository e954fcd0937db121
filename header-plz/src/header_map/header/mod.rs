use bytes::{BufMut, BytesMut};
use std::borrow::Cow;

use crate::abnf::{COMMA_SP, CRLF, HEADER_FS};
mod from_str;

// Single header name with its ordered values.
// Rendered as "Key: v1, v2\r\n"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    key: String,
    values: Vec<String>,
}

impl Header {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Header {
            key: key.into(),
            values,
        }
    }

    pub fn key_as_str(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn push_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into())
    }

    pub fn change_values(&mut self, values: Vec<String>) {
        self.values = values
    }

    // Values joined by ", ", borrowed when single valued.
    pub fn value_as_str(&self) -> Cow<'_, str> {
        match self.values.as_slice() {
            [] => Cow::Borrowed(""),
            [value] => Cow::Borrowed(value),
            values => Cow::Owned(values.join(COMMA_SP)),
        }
    }

    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.put_slice(self.key.as_bytes());
        buf.put_slice(HEADER_FS.as_bytes());
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                buf.put_slice(COMMA_SP.as_bytes());
            }
            buf.put_slice(value.as_bytes());
        }
        buf.put_slice(CRLF.as_bytes());
    }

    pub fn into_bytes(self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.len());
        self.write_to(&mut buf);
        buf
    }

    // Rendered length including ": " and CRLF
    pub fn len(&self) -> usize {
        let values: usize = self.values.iter().map(String::len).sum();
        let separators = self.values.len().saturating_sub(1) * COMMA_SP.len();
        self.key.len() + HEADER_FS.len() + values + separators + CRLF.len()
    }
}
