use std::str::{self, FromStr};

use bytes::{BufMut, BytesMut};

use super::error::InfoLineError;
use crate::{
    abnf::{CRLF, SP},
    methods::Method,
    version::Version,
};

// Request Info Line, "{METHOD} {URI} {VERSION}\r\n"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    uri: String,
    version: String,
}

impl RequestLine {
    pub fn new(method: Method, uri: impl Into<String>, version: impl Into<String>) -> Self {
        RequestLine {
            method,
            uri: uri.into(),
            version: version.into(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri_as_str(&self) -> &str {
        &self.uri
    }

    pub fn version_as_str(&self) -> &str {
        &self.version
    }

    // Parsed version, None if the version is not a known one.
    pub fn version(&self) -> Option<Version> {
        self.version.parse().ok()
    }

    pub fn write_to(&self, buf: &mut BytesMut) {
        buf.put_slice(self.method.as_str().as_bytes());
        buf.put_u8(SP as u8);
        buf.put_slice(self.uri.as_bytes());
        buf.put_u8(SP as u8);
        buf.put_slice(self.version.as_bytes());
        buf.put_slice(CRLF.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.method.as_str().len() + self.uri.len() + self.version.len() + 4
    }

    pub fn into_bytes(self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.len());
        self.write_to(&mut buf);
        buf
    }
}

/* Description:
 *      Request line without the trailing CRLF.
 *
 * Steps:
 *      1. Find first SP, everything before it is the method.
 *      2. Find second SP, everything before it is the uri.
 *      3. Remaining is the version, must be a known version.
 *
 * Error:
 *      InfoLineError::FirstOWS     [1]
 *      InfoLineError::Method       [1]
 *      InfoLineError::SecondOWS    [2]
 *      InfoLineError::Version      [3]
 */
impl FromStr for RequestLine {
    type Err = InfoLineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (method, rest) = line
            .split_once(SP)
            .ok_or_else(|| InfoLineError::FirstOWS(line.to_string()))?;
        if method.is_empty() || !method.bytes().all(is_tchar) {
            return Err(InfoLineError::Method(method.to_string()));
        }
        let (uri, version) = rest
            .split_once(SP)
            .ok_or_else(|| InfoLineError::SecondOWS(rest.to_string()))?;
        Version::from_str(version)?;
        Ok(RequestLine::new(Method::from(method), uri, version))
    }
}

// RFC 9110 token characters
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
