pub mod header;
use std::borrow::Cow;

use bytes::{BufMut, BytesMut};
use header::*;

use crate::abnf::CRLF;

mod from_str;

// Insertion ordered Vec<Header>, rendered followed by the final CRLF.
// Names are matched exactly when building and case-insensitively when
// looking up parsed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    headers: Vec<Header>,
}

impl HeaderMap {
    pub fn new(headers: Vec<Header>) -> Self {
        HeaderMap { headers }
    }

    pub fn headers(&self) -> &Vec<Header> {
        &self.headers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    // Exact key
    pub fn header_position(&self, key: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.key_as_str() == key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.header_position(key).map(|pos| self.headers[pos].values())
    }

    // Append to the values of key, creating the header if absent.
    pub fn add_header(&mut self, key: &str, value: impl Into<String>) {
        match self.header_position(key) {
            Some(pos) => self.headers[pos].push_value(value),
            None => self.headers.push(Header::new(key, vec![value.into()])),
        }
    }

    // Replace the values of key wholesale, keeping its position.
    pub fn set_header(&mut self, key: &str, values: Vec<String>) {
        match self.header_position(key) {
            Some(pos) => self.headers[pos].change_values(values),
            None => self.headers.push(Header::new(key, values)),
        }
    }

    // Case-insensitive key
    pub fn header_key_position(&self, key: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.key_as_str().eq_ignore_ascii_case(key))
    }

    pub fn value_for_key(&self, key: &str) -> Option<Cow<'_, str>> {
        self.header_key_position(key)
            .map(|pos| self.headers[pos].value_as_str())
    }

    pub fn remove_header_on_key(&mut self, key: &str) -> bool {
        match self.header_key_position(key) {
            Some(pos) => {
                self.headers.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn write_to(&self, buf: &mut BytesMut) {
        for header in self.headers.iter() {
            header.write_to(buf);
        }
        buf.put_slice(CRLF.as_bytes());
    }

    pub fn into_bytes(self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.len());
        self.write_to(&mut buf);
        buf
    }

    // Rendered length including the final CRLF
    pub fn len(&self) -> usize {
        self.headers
            .iter()
            .fold(0, |total, entry| total + entry.len())
            + 2
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

// [("Host", ["localhost"]), ..]. A repeated key replaces the earlier one.
impl<K, I, V> FromIterator<(K, I)> for HeaderMap
where
    K: AsRef<str>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut map = HeaderMap::default();
        for (key, values) in iter {
            let values = values.into_iter().map(Into::into).collect();
            map.set_header(key.as_ref(), values);
        }
        map
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
