use crate::info_line::error::InfoLineError;
use std::{fmt::Debug, str::Utf8Error};
use thiserror::Error;

#[cfg_attr(any(test, debug_assertions), derive(PartialEq))]
#[derive(Debug, Error)]
pub enum HeaderReadError {
    #[error("infoline| {0}")]
    InfoLine(#[from] InfoLineError),
    #[error("header| {0}")]
    Header(String),
    #[error("utf8| {0}")]
    Utf8(#[from] Utf8Error),
    // No "\r\n\r\n" found
    #[error("header not enough data")]
    HeaderNotEnoughData,
}
