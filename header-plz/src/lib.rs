#![allow(clippy::len_without_is_empty)]
pub mod abnf;
pub mod const_headers;
pub mod error;
pub mod header_map;
pub mod info_line;
pub mod message_head;
pub mod methods;
pub mod version;

pub use header_map::{HeaderMap, header::Header};
pub use info_line::request::RequestLine;
pub use message_head::MessageHead;
pub use methods::Method;
pub use version::Version;
