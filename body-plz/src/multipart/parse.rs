use std::str;

use bytes::Bytes;
use header_plz::{
    HeaderMap,
    const_headers::{CONTENT_DISPOSITION, CONTENT_TYPE},
};

use super::{CRLF, boundary::BOUNDARY_PREFIX};
use crate::error::MultipartError;

const PART_HEADER_END: &[u8] = b"\r\n\r\n";
const BOUNDARY_PARAM: &str = "boundary=";

// A single decoded part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FormPart {
    pub fn is_file(&self) -> bool {
        self.filename.is_some()
    }
}

// "multipart/form-data; boundary=XYZ" -> XYZ
pub fn boundary_from_content_type(content_type: &str) -> Option<&str> {
    content_type
        .split(';')
        .map(str::trim)
        .find_map(|param| {
            param
                .get(..BOUNDARY_PARAM.len())
                .filter(|key| key.eq_ignore_ascii_case(BOUNDARY_PARAM))
                .map(|_| &param[BOUNDARY_PARAM.len()..])
        })
        .map(|boundary| boundary.trim_matches('"'))
        .filter(|boundary| !boundary.is_empty())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

// form-data; name="x"; filename="y"
fn disposition_param<'a>(disposition: &'a str, key: &str) -> Option<&'a str> {
    disposition.split(';').skip(1).find_map(|param| {
        let (k, v) = param.trim().split_once('=')?;
        k.trim()
            .eq_ignore_ascii_case(key)
            .then(|| v.trim().trim_matches('"'))
    })
}

/* Steps:
 *      1. Skip preamble upto the first delimiter "--{boundary}".
 *      ----- loop -----
 *      2. "--" after delimiter ends the body.
 *      3. Expect CRLF, part headers upto "\r\n\r\n".
 *      4. Part data upto "\r\n--{boundary}".
 *      5. Read name and filename from Content-Disposition.
 *
 * Error:
 *      MultipartError::MissingBoundary     [1]
 *      MultipartError::MissingDelimiter    [1]
 *      MultipartError::Malformed           [3]
 *      MultipartError::Unterminated        [4]
 *      MultipartError::MissingDisposition  [5]
 *      MultipartError::MissingName         [5]
 */
pub fn parse(body: &[u8], boundary: &str) -> Result<Vec<FormPart>, MultipartError> {
    if boundary.is_empty() {
        return Err(MultipartError::MissingBoundary);
    }
    let mut delimiter = BOUNDARY_PREFIX.to_vec();
    delimiter.extend_from_slice(boundary.as_bytes());
    let mut close = CRLF.to_vec();
    close.extend_from_slice(&delimiter);

    let start = find(body, &delimiter)
        .ok_or_else(|| MultipartError::MissingDelimiter(boundary.to_string()))?;
    let mut rest = &body[start + delimiter.len()..];
    let mut parts = Vec::new();

    loop {
        if rest.starts_with(BOUNDARY_PREFIX) {
            break;
        }
        rest = rest
            .strip_prefix(CRLF)
            .ok_or(MultipartError::Malformed("no crlf after delimiter"))?;
        let header_end =
            find(rest, PART_HEADER_END).ok_or(MultipartError::Malformed("no part header end"))?;
        let headers: HeaderMap = str::from_utf8(&rest[..header_end])?.parse()?;
        rest = &rest[header_end + PART_HEADER_END.len()..];
        let data_end = find(rest, &close)
            .ok_or_else(|| MultipartError::Unterminated(boundary.to_string()))?;
        let data = Bytes::copy_from_slice(&rest[..data_end]);
        rest = &rest[data_end + close.len()..];

        let disposition = headers
            .value_for_key(CONTENT_DISPOSITION)
            .ok_or(MultipartError::MissingDisposition)?;
        let name = disposition_param(&disposition, "name")
            .ok_or_else(|| MultipartError::MissingName(disposition.to_string()))?
            .to_string();
        let filename = disposition_param(&disposition, "filename").map(str::to_string);
        let content_type = headers.value_for_key(CONTENT_TYPE).map(|ct| ct.into_owned());
        parts.push(FormPart {
            name,
            filename,
            content_type,
            data,
        });
    }
    Ok(parts)
}
