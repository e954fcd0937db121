use std::{io, path::PathBuf, str::Utf8Error};

use header_plz::error::HeaderReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("file read| {path}| {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json| {0}")]
    Json(#[from] serde_json::Error),
    // Boundary occurs inside the payload
    #[error("boundary collision| {0}")]
    BoundaryCollision(String),
}

#[cfg_attr(any(test, debug_assertions), derive(PartialEq))]
#[derive(Debug, Error)]
pub enum MultipartError {
    #[error("missing boundary")]
    MissingBoundary,
    #[error("missing delimiter| {0}")]
    MissingDelimiter(String),
    #[error("malformed part| {0}")]
    Malformed(&'static str),
    #[error("unterminated part| {0}")]
    Unterminated(String),
    #[error("part header| {0}")]
    Header(#[from] HeaderReadError),
    #[error("utf8| {0}")]
    Utf8(#[from] Utf8Error),
    #[error("missing content disposition")]
    MissingDisposition,
    #[error("missing name| {0}")]
    MissingName(String),
}
