use std::str;

use bytes::BytesMut;
use tracing::trace;

use super::MessageHead;
use crate::{
    abnf::{CRLF, HEADER_DELIMITER},
    error::HeaderReadError,
    header_map::HeaderMap,
    info_line::request::RequestLine,
};

impl MessageHead {
    /* Steps:
     *      1. Find HEADER_DELIMITER ( 2 * CRLF ).
     *      2. Split buf at index + 4, buf now only contains the body.
     *      3. Check head is valid utf8.
     *      4. First line is the request line, rest is the header block.
     *
     * Error:
     *      HeaderReadError::HeaderNotEnoughData    [1]
     *      HeaderReadError::Utf8                   [3]
     *      HeaderReadError::InfoLine               [4]
     *      HeaderReadError::Header                 [4]
     */
    pub fn split_from(buf: &mut BytesMut) -> Result<MessageHead, HeaderReadError> {
        let index = buf
            .windows(HEADER_DELIMITER.len())
            .position(|window| window == HEADER_DELIMITER)
            .ok_or(HeaderReadError::HeaderNotEnoughData)?;
        let raw = buf.split_to(index + HEADER_DELIMITER.len());
        parse_head(&raw).inspect_err(|e| trace!("head| {}| {} bytes", e, raw.len()))
    }
}

fn parse_head(raw: &[u8]) -> Result<MessageHead, HeaderReadError> {
    let head = str::from_utf8(raw)?;
    let (line, headers) = head
        .split_once(CRLF)
        .ok_or_else(|| HeaderReadError::Header(head.to_string()))?;
    let info_line: RequestLine = line.parse()?;
    // Drop the final empty line
    let headers = headers.strip_suffix(CRLF).unwrap_or(headers);
    let header_map: HeaderMap = headers.parse()?;
    Ok(MessageHead::new(info_line, header_map))
}

impl TryFrom<BytesMut> for MessageHead {
    type Error = HeaderReadError;

    fn try_from(mut data: BytesMut) -> Result<Self, HeaderReadError> {
        MessageHead::split_from(&mut data)
    }
}
