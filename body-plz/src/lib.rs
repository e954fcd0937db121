pub mod error;
pub mod form;
pub mod json;
pub mod multipart;

pub use error::{BodyError, MultipartError};
