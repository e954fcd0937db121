use std::path::Path;

use body_plz::{
    form::{self, FORM_URLENCODED},
    json::{self, APPLICATION_JSON},
    multipart::Multipart,
};
use bytes::BytesMut;
use header_plz::{
    HeaderMap, MessageHead, Method, RequestLine,
    const_headers::{CONTENT_LENGTH, CONTENT_TYPE, HOST},
    version::HTTP_1_1,
};
use protocol_traits_plz::ParseRequest;
use serde::Serialize;
use tracing::{error, trace};
use uri_plz::Uri;

use crate::error::BuildError;

/// Fluent description of an HTTP/1.x request.
///
/// Setters consume and return the builder. Body helpers always replace
/// `Content-Type` and `Content-Length` instead of appending to them.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    uri: Uri,
    protocol: String,
    header_map: HeaderMap,
    body: BytesMut,
}

impl RequestBuilder {
    /// Upper-cases `method` and parses `uri`.
    pub fn new(method: &str, uri: &str) -> Result<Self, BuildError> {
        let uri = Uri::parse(uri)?;
        Ok(RequestBuilder {
            method: Method::from(method),
            uri,
            protocol: HTTP_1_1.to_string(),
            header_map: HeaderMap::default(),
            body: BytesMut::new(),
        })
    }

    pub fn get(uri: &str) -> Result<Self, BuildError> {
        Self::new("GET", uri)
    }

    pub fn post(uri: &str) -> Result<Self, BuildError> {
        Self::new("POST", uri)
    }

    pub fn put(uri: &str) -> Result<Self, BuildError> {
        Self::new("PUT", uri)
    }

    pub fn delete(uri: &str) -> Result<Self, BuildError> {
        Self::new("DELETE", uri)
    }

    pub fn patch(uri: &str) -> Result<Self, BuildError> {
        Self::new("PATCH", uri)
    }

    pub fn head(uri: &str) -> Result<Self, BuildError> {
        Self::new("HEAD", uri)
    }

    pub fn options(uri: &str) -> Result<Self, BuildError> {
        Self::new("OPTIONS", uri)
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Replace every header.
    pub fn headers<I, K, T, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header_map = headers.into_iter().collect();
        self
    }

    /// Append `value` to the values of `name`.
    pub fn add_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.header_map.add_header(name, value);
        self
    }

    /// Replace the values of `name`.
    pub fn set_header<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header_map
            .set_header(name, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn host(self, host: impl Into<String>) -> Self {
        self.set_header(HOST, [host])
    }

    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.set_header(CONTENT_TYPE, [content_type])
    }

    pub fn content_length(self, length: usize) -> Self {
        self.set_header(CONTENT_LENGTH, [length.to_string()])
    }

    /// Store `body` and set `Content-Length` to its length.
    pub fn body(self, body: impl AsRef<[u8]>) -> Self {
        let body = body.as_ref();
        let mut builder = self.content_length(body.len());
        builder.body = BytesMut::from(body);
        builder
    }

    /// `application/x-www-form-urlencoded` body, pairs in iteration order.
    pub fn form_data<I, K, V>(self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let body = form::encode(data);
        self.content_type(FORM_URLENCODED).body(body)
    }

    /// `application/json` body.
    ///
    /// Fails only for values serde_json cannot encode, such as maps with
    /// non-string keys.
    pub fn json_data<T>(self, data: &T) -> Result<Self, BuildError>
    where
        T: Serialize + ?Sized,
    {
        let body = json::encode(data)?;
        Ok(self.content_type(APPLICATION_JSON).body(body))
    }

    /// `multipart/form-data` body with fields only.
    pub fn multipart<I, K, V>(self, data: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<[u8]>,
    {
        let files: [(&str, &Path); 0] = [];
        self.multipart_with_files(data, files)
    }

    /* Steps:
     *      1. Add every field, then every file read from its path.
     *      2. Encode with a random boundary that does not occur in the
     *         payload.
     *      3. Set Content-Type and delegate to body().
     *
     * Error:
     *      BuildError::FileRead            [1]
     *      BuildError::BoundaryCollision   [2]
     */
    pub fn multipart_with_files<I, K, V, F, N, P>(
        self,
        data: I,
        files: F,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<[u8]>,
        F: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: AsRef<Path>,
    {
        let mut multipart = Multipart::new();
        for (name, value) in data {
            multipart = multipart.add_field(name, value);
        }
        for (name, path) in files {
            multipart = multipart.add_file(name, path)?;
        }
        let encoded = multipart.finish()?;
        let content_type = encoded.content_type();
        Ok(self.content_type(content_type).body(encoded.into_body()))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn protocol_as_str(&self) -> &str {
        &self.protocol
    }

    pub fn header_map(&self) -> &HeaderMap {
        &self.header_map
    }

    pub fn body_as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Render request line, headers, empty line and body.
    pub fn message(&self) -> BytesMut {
        let info_line = RequestLine::new(
            self.method.clone(),
            self.uri.to_string(),
            self.protocol.as_str(),
        );
        let head = MessageHead::new(info_line, self.header_map.clone());
        let mut message = BytesMut::with_capacity(head.len() + self.body.len());
        head.write_to(&mut message);
        message.extend_from_slice(&self.body);
        message
    }

    /// Render the message and parse it with a `P` built from `options`.
    /// Every call renders afresh.
    pub fn create<P>(&self, options: P::Options) -> Result<P, BuildError>
    where
        P: ParseRequest,
    {
        let message = self.message();
        trace!("create| {} {} bytes", self.method, message.len());
        let mut request = P::with_options(options);
        if let Err(e) = request.parse(message) {
            error!("create| {}", e);
            return Err(BuildError::MessageParse(Box::new(e)));
        }
        Ok(request)
    }

    /// [`create`](Self::create) with default options.
    pub fn build<P>(&self) -> Result<P, BuildError>
    where
        P: ParseRequest,
        P::Options: Default,
    {
        self.create(P::Options::default())
    }
}
