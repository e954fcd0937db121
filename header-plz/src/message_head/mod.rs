use bytes::BytesMut;

use crate::{header_map::HeaderMap, info_line::request::RequestLine};

mod try_from_bytes;

// Represent the Header region Infoline + HeaderMap.
#[derive(Clone, Eq, Debug, PartialEq)]
pub struct MessageHead {
    info_line: RequestLine,
    header_map: HeaderMap,
}

impl MessageHead {
    pub fn new(info_line: RequestLine, header_map: HeaderMap) -> Self {
        MessageHead {
            info_line,
            header_map,
        }
    }

    pub fn write_to(&self, buf: &mut BytesMut) {
        self.info_line.write_to(buf);
        self.header_map.write_to(buf);
    }

    // Convert into Data
    pub fn into_bytes(self) -> BytesMut {
        let mut data = BytesMut::with_capacity(self.len());
        self.write_to(&mut data);
        data
    }

    pub fn len(&self) -> usize {
        self.info_line.len() + self.header_map.len()
    }

    pub fn header_map(&self) -> &HeaderMap {
        &self.header_map
    }

    pub fn info_line(&self) -> &RequestLine {
        &self.info_line
    }
}
