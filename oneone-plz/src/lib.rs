mod error;
mod file;
mod one_one_struct;
mod options;

pub use error::ParseError;
pub use file::UploadedFile;
pub use one_one_struct::OneOneRequest;
pub use options::ParseOptions;
