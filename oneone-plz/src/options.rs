use serde::Deserialize;

const DEFAULT_MAX_BODY_SIZE: usize = 8 * 1024 * 1024;

/// Options a [`OneOneRequest`](crate::OneOneRequest) is created with.
///
/// Missing fields take their default, so options can be read from a
/// partial JSON document:
///
/// ```
/// use oneone_plz::ParseOptions;
///
/// let options: ParseOptions = serde_json::from_str(r#"{"parse_body": false}"#).unwrap();
/// assert!(!options.parse_body);
/// assert!(options.strict_content_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Decode url-encoded and multipart bodies into form fields and files.
    pub parse_body: bool,
    /// Collect file parts of multipart bodies.
    pub upload_files: bool,
    /// Reject a body whose length differs from Content-Length. When off, a
    /// longer body is truncated to Content-Length.
    pub strict_content_length: bool,
    pub max_body_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            parse_body: true,
            upload_files: true,
            strict_content_length: true,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
