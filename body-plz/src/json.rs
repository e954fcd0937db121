use bytes::{BufMut, BytesMut};
use serde::Serialize;

use crate::error::BodyError;

pub const APPLICATION_JSON: &str = "application/json";

pub fn encode<T>(value: &T) -> Result<BytesMut, BodyError>
where
    T: Serialize + ?Sized,
{
    let mut writer = BytesMut::new().writer();
    serde_json::to_writer(&mut writer, value)?;
    Ok(writer.into_inner())
}
