use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUri {
    #[error("invalid char| {ch:?} at {index}")]
    InvalidChar { ch: char, index: usize },
    #[error("percent encoding| at {0}")]
    PercentEncoding(usize),
    #[error("scheme| {0}")]
    InvalidScheme(String),
    #[error("authority| {0}")]
    InvalidAuthority(String),
    #[error("port| {0}")]
    InvalidPort(String),
}
