use bytes::BytesMut;
use uri_plz::form_urlencoded;

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Each key and value encoded independently, joined by "&"
pub fn encode<I, K, V>(pairs: I) -> BytesMut
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    BytesMut::from(form_urlencoded::serialize(pairs).as_str())
}

pub fn decode(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(&String::from_utf8_lossy(body))
}
