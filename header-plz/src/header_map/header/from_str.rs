use std::str::FromStr;

use super::*;
use crate::{
    abnf::{COLON, HTAB, SP},
    error::HeaderReadError,
};

// (Content-Type, application/json)
impl From<(&str, &str)> for Header {
    fn from((key, value): (&str, &str)) -> Self {
        Header::new(key, vec![value.to_string()])
    }
}

/* Steps:
 *      1. Find first ":".
 *      2. Key is everything before it, must be non-empty and contain no
 *         whitespace.
 *      3. Value is everything after it with optional whitespace trimmed.
 *
 * Error:
 *      HeaderReadError::Header     [1] [2]
 */
impl FromStr for Header {
    type Err = HeaderReadError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (key, value) = line
            .split_once(COLON)
            .ok_or_else(|| HeaderReadError::Header(line.to_string()))?;
        if key.is_empty() || key.contains([SP, HTAB]) {
            return Err(HeaderReadError::Header(line.to_string()));
        }
        let value = value.trim_matches([SP, HTAB]);
        Ok(Header::from((key, value)))
    }
}
