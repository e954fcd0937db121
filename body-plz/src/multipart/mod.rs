//! `multipart/form-data` bodies.
//!
//! Fields are written first, then files, each part delimited by
//! `--{boundary}\r\n` and closed with CRLF. The body ends with
//! `--{boundary}--` without a trailing CRLF.

use std::path::Path;

use bytes::{BufMut, Bytes, BytesMut};
use rand::Rng;
use header_plz::const_headers::{CONTENT_DISPOSITION, CONTENT_TRANSFER_ENCODING, CONTENT_TYPE};
use tracing::{trace, warn};

use crate::error::BodyError;

pub mod boundary;
pub mod parse;

use boundary::BOUNDARY_PREFIX;

pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const OCTET_STREAM: &str = "application/octet-stream";
pub const BINARY: &str = "binary";
const CRLF: &[u8] = b"\r\n";
// Attempts at a boundary that does not occur in the payload
const MAX_BOUNDARY_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content: Bytes,
}

impl Part {
    pub fn field(name: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        Part {
            name: name.into(),
            filename: None,
            content: Bytes::copy_from_slice(value.as_ref()),
        }
    }

    pub fn file(name: impl Into<String>, filename: impl Into<String>, content: Bytes) -> Self {
        Part {
            name: name.into(),
            filename: Some(filename.into()),
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    fn collides(&self, boundary: &str) -> bool {
        boundary::occurs_in(boundary, &self.content)
            || boundary::occurs_in(boundary, self.name.as_bytes())
            || self
                .filename
                .as_ref()
                .is_some_and(|f| boundary::occurs_in(boundary, f.as_bytes()))
    }

    fn write_to(&self, boundary: &str, buf: &mut BytesMut) {
        buf.put_slice(BOUNDARY_PREFIX);
        buf.put_slice(boundary.as_bytes());
        buf.put_slice(CRLF);
        buf.put_slice(CONTENT_DISPOSITION.as_bytes());
        buf.put_slice(b": form-data; name=\"");
        buf.put_slice(self.name.as_bytes());
        buf.put_u8(b'"');
        if let Some(filename) = &self.filename {
            buf.put_slice(b"; filename=\"");
            buf.put_slice(filename.as_bytes());
            buf.put_u8(b'"');
            buf.put_slice(CRLF);
            buf.put_slice(CONTENT_TYPE.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(OCTET_STREAM.as_bytes());
            buf.put_slice(CRLF);
            buf.put_slice(CONTENT_TRANSFER_ENCODING.as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(BINARY.as_bytes());
        }
        buf.put_slice(CRLF);
        buf.put_slice(CRLF);
        buf.put_slice(&self.content);
        buf.put_slice(CRLF);
    }
}

// Encoded body with the boundary it was written with.
#[derive(Debug)]
pub struct MultipartBody {
    boundary: String,
    body: BytesMut,
}

impl MultipartBody {
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    // multipart/form-data; boundary={boundary}
    pub fn content_type(&self) -> String {
        format!("{}; boundary={}", MULTIPART_FORM_DATA, self.boundary)
    }

    pub fn into_body(self) -> BytesMut {
        self.body
    }
}

#[derive(Debug, Default)]
pub struct Multipart {
    boundary: Option<String>,
    parts: Vec<Part>,
}

impl Multipart {
    pub fn new() -> Self {
        Multipart::default()
    }

    // Fixed boundary, finish() fails if it occurs in the payload.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Multipart {
            boundary: Some(boundary.into()),
            parts: Vec::new(),
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn add_field(mut self, name: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        self.parts.push(Part::field(name, value));
        self
    }

    pub fn add_file_bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        self.parts.push(Part::file(name, filename, content.into()));
        self
    }

    /* Steps:
     *      1. Read the whole file.
     *      2. Use the file name component as filename, the whole path if
     *         there is none.
     *
     * Error:
     *      BodyError::FileRead     [1]
     */
    pub fn add_file(
        self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, BodyError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| BodyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
            .into_owned();
        trace!("multipart| file {} {} bytes", filename, content.len());
        Ok(self.add_file_bytes(name, filename, content))
    }

    fn collides(&self, boundary: &str) -> bool {
        self.parts.iter().any(|part| part.collides(boundary))
    }

    fn pick_boundary<R>(&self, rng: &mut R) -> Result<String, BodyError>
    where
        R: Rng + ?Sized,
    {
        if let Some(boundary) = &self.boundary {
            if boundary.is_empty() || self.collides(boundary) {
                return Err(BodyError::BoundaryCollision(boundary.clone()));
            }
            return Ok(boundary.clone());
        }
        let mut boundary = boundary::generate(rng);
        for _ in 1..MAX_BOUNDARY_ATTEMPTS {
            if !self.collides(&boundary) {
                return Ok(boundary);
            }
            warn!("multipart| boundary {} occurs in payload, regenerating", boundary);
            boundary = boundary::generate(rng);
        }
        if self.collides(&boundary) {
            return Err(BodyError::BoundaryCollision(boundary));
        }
        Ok(boundary)
    }

    pub fn finish(self) -> Result<MultipartBody, BodyError> {
        self.finish_with_rng(&mut rand::rng())
    }

    /* Steps:
     *      1. Use the fixed boundary, or draw one from rng until it does not
     *         occur in any part.
     *      2. Write every part, then the closing delimiter.
     *
     * Error:
     *      BodyError::BoundaryCollision    [1]
     */
    pub fn finish_with_rng<R>(self, rng: &mut R) -> Result<MultipartBody, BodyError>
    where
        R: Rng + ?Sized,
    {
        let boundary = self.pick_boundary(rng)?;
        let mut body = BytesMut::new();
        for part in self.parts.iter() {
            part.write_to(&boundary, &mut body);
        }
        body.put_slice(BOUNDARY_PREFIX);
        body.put_slice(boundary.as_bytes());
        body.put_slice(BOUNDARY_PREFIX);
        Ok(MultipartBody { boundary, body })
    }
}
