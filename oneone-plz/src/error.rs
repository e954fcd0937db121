use body_plz::MultipartError;
use header_plz::error::HeaderReadError;
use thiserror::Error;
use uri_plz::InvalidUri;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("head| {0}")]
    Head(#[from] HeaderReadError),
    #[error("uri| {0}")]
    Uri(#[from] InvalidUri),
    #[error("empty request target")]
    EmptyTarget,
    #[error("version| {0}")]
    Version(String),
    #[error("content length| {0}")]
    ContentLength(String),
    #[error("body length| expected {expected}, got {actual}")]
    BodyLength { expected: usize, actual: usize },
    #[error("body too large| {size} > {max}")]
    BodyTooLarge { size: usize, max: usize },
    #[error("transfer encoding| {0}")]
    TransferEncoding(String),
    #[error("multipart| {0}")]
    Multipart(#[from] MultipartError),
    #[error("json| {0}")]
    Json(#[from] serde_json::Error),
    #[error("already parsed")]
    AlreadyParsed,
}
