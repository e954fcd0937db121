//! Build raw HTTP/1.x request messages for tests and hand them to a
//! [`ParseRequest`] implementation.
//!
//! ```
//! use fixture_plz::RequestBuilder;
//!
//! let message = RequestBuilder::post("/users")
//!     .unwrap()
//!     .host("localhost")
//!     .body("foo")
//!     .message();
//! assert_eq!(
//!     message,
//!     "POST /users HTTP/1.1\r\nHost: localhost\r\nContent-Length: 3\r\n\r\nfoo"
//! );
//! ```
mod builder;
mod error;

pub use builder::RequestBuilder;
pub use error::BuildError;
pub use protocol_traits_plz::ParseRequest;
