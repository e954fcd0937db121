pub const COLON: char = ':';
pub const COMMA_SP: &str = ", ";
pub const CRLF: &str = "\r\n";
pub const HEADER_DELIMITER: &[u8; 4] = b"\r\n\r\n";
pub const HEADER_FS: &str = ": ";
pub const HTAB: char = '\t';
pub const SP: char = ' ';
