use std::fmt;

pub const CONNECT: &[u8] = b"CONNECT";
pub const DELETE: &[u8] = b"DELETE";
pub const GET: &[u8] = b"GET";
pub const HEAD: &[u8] = b"HEAD";
pub const OPTIONS: &[u8] = b"OPTIONS";
pub const PATCH: &[u8] = b"PATCH";
pub const POST: &[u8] = b"POST";
pub const PUT: &[u8] = b"PUT";
pub const TRACE: &[u8] = b"TRACE";

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Method {
    CONNECT,
    DELETE,
    #[default]
    GET,
    HEAD,
    OPTIONS,
    PATCH,
    POST,
    PUT,
    TRACE,
    // always stored upper-cased
    UNKNOWN(String),
}

impl Method {
    fn unknown(src: &[u8]) -> Self {
        Self::UNKNOWN(String::from_utf8_lossy(src).into_owned())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::CONNECT => "CONNECT",
            Method::DELETE => "DELETE",
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::TRACE => "TRACE",
            Method::UNKNOWN(method) => method,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/* Steps:
 *      1. Upper-case the input.
 *      2. Match on length, then on the known methods of that length.
 *      3. Anything else is kept as UNKNOWN.
 */
impl From<&str> for Method {
    fn from(src: &str) -> Method {
        let upper = src.to_ascii_uppercase();
        let src = upper.as_bytes();
        match src.len() {
            3 => match src {
                GET => Method::GET,
                PUT => Method::PUT,
                _ => Method::unknown(src),
            },
            4 => match src {
                HEAD => Method::HEAD,
                POST => Method::POST,
                _ => Method::unknown(src),
            },
            5 => match src {
                PATCH => Method::PATCH,
                TRACE => Method::TRACE,
                _ => Method::unknown(src),
            },
            6 => match src {
                DELETE => Method::DELETE,
                _ => Method::unknown(src),
            },
            7 => match src {
                CONNECT => Method::CONNECT,
                OPTIONS => Method::OPTIONS,
                _ => Method::unknown(src),
            },
            _ => Method::unknown(src),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
