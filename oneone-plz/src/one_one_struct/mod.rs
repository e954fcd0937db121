use std::borrow::Cow;

use body_plz::{
    form::{self, FORM_URLENCODED},
    multipart::{MULTIPART_FORM_DATA, parse as multipart},
};
use bytes::{Bytes, BytesMut};
use header_plz::{
    HeaderMap, MessageHead, Method, Version,
    const_headers::{CONTENT_LENGTH, CONTENT_TYPE},
};
use protocol_traits_plz::ParseRequest;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use uri_plz::Uri;

use crate::{ParseError, ParseOptions, UploadedFile};

const TRANSFER_ENCODING: &str = "Transfer-Encoding";

#[derive(Debug)]
struct Parsed {
    head: MessageHead,
    uri: Uri,
    body: Bytes,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
    files: Vec<UploadedFile>,
}

/// HTTP/1.x request parsed from a complete message.
///
/// Accessors return empty values until [`ParseRequest::parse`] succeeds.
#[derive(Debug)]
pub struct OneOneRequest {
    options: ParseOptions,
    parsed: Option<Parsed>,
}

impl OneOneRequest {
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    pub fn method_parsed(&self) -> Option<&Method> {
        self.parsed.as_ref().map(|p| p.head.info_line().method())
    }

    pub fn uri(&self) -> Option<&Uri> {
        self.parsed.as_ref().map(|p| &p.uri)
    }

    pub fn version(&self) -> Option<Version> {
        self.parsed.as_ref().and_then(|p| p.head.info_line().version())
    }

    pub fn header_map(&self) -> Option<&HeaderMap> {
        self.parsed.as_ref().map(|p| p.head.header_map())
    }

    pub fn value_for_key(&self, key: &str) -> Option<Cow<'_, str>> {
        self.header_map()?.value_for_key(key)
    }

    pub fn query(&self) -> &[(String, String)] {
        self.parsed.as_ref().map_or(&[][..], |p| p.query.as_slice())
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        find_value(self.query(), key)
    }

    // Url-encoded or multipart fields in body order
    pub fn form(&self) -> &[(String, String)] {
        self.parsed.as_ref().map_or(&[][..], |p| p.form.as_slice())
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        find_value(self.form(), key)
    }

    pub fn files(&self) -> &[UploadedFile] {
        self.parsed.as_ref().map_or(&[][..], |p| p.files.as_slice())
    }

    pub fn file(&self, field: &str) -> Option<&UploadedFile> {
        self.files().iter().find(|f| f.field() == field)
    }

    // Decode the raw body as JSON
    pub fn json<T>(&self) -> Result<T, ParseError>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_slice(ParseRequest::body(self))?)
    }

    fn parse_message(&self, mut message: BytesMut) -> Result<Parsed, ParseError> {
        // 1. Head
        let head = MessageHead::split_from(&mut message)?;
        let info_line = head.info_line();
        if !info_line.version().is_some_and(|v| v.is_one()) {
            return Err(ParseError::Version(
                info_line.version_as_str().to_string(),
            ));
        }

        // 2. Request target
        let target = info_line.uri_as_str();
        if target.is_empty() {
            return Err(ParseError::EmptyTarget);
        }
        let uri = Uri::parse(target)?;
        let query = uri.query().map(|q| q.pairs()).unwrap_or_default();

        // 3. Body
        let header_map = head.header_map();
        if let Some(te) = header_map.value_for_key(TRANSFER_ENCODING) {
            return Err(ParseError::TransferEncoding(te.into_owned()));
        }
        let expected = match header_map.value_for_key(CONTENT_LENGTH) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ParseError::ContentLength(value.to_string()))?,
            None => 0,
        };
        let actual = message.len();
        if actual < expected || (self.options.strict_content_length && actual != expected) {
            return Err(ParseError::BodyLength { expected, actual });
        }
        message.truncate(expected);
        if expected > self.options.max_body_size {
            return Err(ParseError::BodyTooLarge {
                size: expected,
                max: self.options.max_body_size,
            });
        }
        let body = message.freeze();

        // 4. Form fields and files
        let mut form = Vec::new();
        let mut files = Vec::new();
        if self.options.parse_body && !body.is_empty() {
            let content_type = header_map
                .value_for_key(CONTENT_TYPE)
                .map(|ct| ct.into_owned())
                .unwrap_or_default();
            let mime = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim();
            if mime.eq_ignore_ascii_case(FORM_URLENCODED) {
                form = form::decode(&body);
            } else if mime.eq_ignore_ascii_case(MULTIPART_FORM_DATA) {
                let boundary = multipart::boundary_from_content_type(&content_type)
                    .ok_or(body_plz::MultipartError::MissingBoundary)?;
                for part in multipart::parse(&body, boundary)? {
                    match part.filename {
                        Some(filename) => {
                            if self.options.upload_files {
                                files.push(UploadedFile::new(
                                    part.name,
                                    filename,
                                    part.content_type,
                                    part.data,
                                ));
                            }
                        }
                        None => form.push((
                            part.name,
                            String::from_utf8_lossy(&part.data).into_owned(),
                        )),
                    }
                }
            }
        }

        Ok(Parsed {
            head,
            uri,
            body,
            query,
            form,
            files,
        })
    }
}

fn find_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find_map(|(k, v)| (k == key).then_some(v.as_str()))
}

impl ParseRequest for OneOneRequest {
    type Options = ParseOptions;
    type Error = ParseError;

    fn with_options(options: ParseOptions) -> Self {
        OneOneRequest {
            options,
            parsed: None,
        }
    }

    /* Steps:
     *      1. Split and parse the message head, version must be HTTP/1.x.
     *      2. Parse the request target.
     *      3. Body must match Content-Length.
     *      4. Decode url-encoded and multipart bodies.
     *
     * Error:
     *      ParseError::AlreadyParsed       [Default]
     *      ParseError::Head                [1]
     *      ParseError::Version             [1]
     *      ParseError::EmptyTarget         [2]
     *      ParseError::Uri                 [2]
     *      ParseError::TransferEncoding    [3]
     *      ParseError::ContentLength       [3]
     *      ParseError::BodyLength          [3]
     *      ParseError::BodyTooLarge        [3]
     *      ParseError::Multipart           [4]
     */
    fn parse(&mut self, message: BytesMut) -> Result<(), ParseError> {
        if self.parsed.is_some() {
            return Err(ParseError::AlreadyParsed);
        }
        match self.parse_message(message) {
            Ok(parsed) => {
                debug!(
                    "parse| {} {} form={} files={}",
                    parsed.head.info_line().method(),
                    parsed.uri,
                    parsed.form.len(),
                    parsed.files.len()
                );
                self.parsed = Some(parsed);
                Ok(())
            }
            Err(e) => {
                error!("parse| {}", e);
                Err(e)
            }
        }
    }

    fn method(&self) -> &str {
        self.method_parsed().map_or("", Method::as_str)
    }

    fn path(&self) -> &str {
        self.uri().map_or("", Uri::path)
    }

    fn header(&self, name: &str) -> Option<String> {
        self.value_for_key(name).map(Cow::into_owned)
    }

    fn body(&self) -> &[u8] {
        self.parsed.as_ref().map_or(&[][..], |p| &p.body[..])
    }
}
