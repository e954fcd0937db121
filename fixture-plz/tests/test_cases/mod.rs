use super::*;
pub mod create;
pub mod form_data;
pub mod headers;
pub mod json_data;
pub mod methods;
pub mod multipart;
