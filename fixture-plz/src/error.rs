use std::{io, path::PathBuf};

use body_plz::BodyError;
use thiserror::Error;
use uri_plz::InvalidUri;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("uri| {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error("file read| {path}| {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json| {0}")]
    Json(#[from] serde_json::Error),
    #[error("boundary collision| {0}")]
    BoundaryCollision(String),
    // Rejected by the parser
    #[error("message parse| {0}")]
    MessageParse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<BodyError> for BuildError {
    fn from(e: BodyError) -> Self {
        match e {
            BodyError::FileRead { path, source } => BuildError::FileRead { path, source },
            BodyError::Json(e) => BuildError::Json(e),
            BodyError::BoundaryCollision(boundary) => BuildError::BoundaryCollision(boundary),
        }
    }
}
