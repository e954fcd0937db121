pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TRANSFER_ENCODING: &str = "Content-Transfer-Encoding";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const HOST: &str = "Host";
