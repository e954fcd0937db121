use std::str::FromStr;

use crate::{abnf::CRLF, error::HeaderReadError};

use super::{HeaderMap, header::Header};

/* Description:
 *      Header block without the final empty line, each line separated by
 *      CRLF. Values of a repeated key are appended in order to the first
 *      line with that key, ignoring case.
 *
 * Steps:
 *      1. Split on CRLF, skipping the trailing empty piece.
 *      2. Parse each line as a Header.
 *      3. Append its values to an existing header or push it.
 *
 * Error:
 *      HeaderReadError::Header     [2]
 */
impl FromStr for HeaderMap {
    type Err = HeaderReadError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut map = HeaderMap::default();
        let input = input.strip_suffix(CRLF).unwrap_or(input);
        if input.is_empty() {
            return Ok(map);
        }
        for line in input.split(CRLF) {
            let header: Header = line.parse()?;
            match map.header_key_position(header.key_as_str()) {
                Some(pos) => {
                    for value in header.values() {
                        map.headers[pos].push_value(value.as_str());
                    }
                }
                None => map.headers.push(header),
            }
        }
        Ok(map)
    }
}
