mod error;
pub mod form_urlencoded;
mod query;
mod uri;

pub use error::InvalidUri;
pub use query::Query;
pub use uri::Uri;

pub const FRAGMENT: char = '#';
pub const QMARK: char = '?';
pub const AMBER: char = '&';
pub const EQUAL: char = '=';
pub const COLON: char = ':';
pub const PERCENT: char = '%';
pub const AUTHORITY_START: &str = "//";
