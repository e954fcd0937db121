//! `application/x-www-form-urlencoded` encoding.
//!
//! Everything except ASCII alphanumerics and `-`, `_`, `.` is percent
//! encoded, a space becomes `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::{AMBER, EQUAL};

const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

pub fn encode(input: &str) -> String {
    // a literal "%20" in the input is itself encoded to "%2520"
    utf8_percent_encode(input, FORM)
        .to_string()
        .replace("%20", "+")
}

pub fn decode(input: &str) -> String {
    let input = input.replace('+', " ");
    percent_decode_str(&input).decode_utf8_lossy().into_owned()
}

// key=value pairs joined with "&", in iteration order
pub fn serialize<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push(AMBER);
        }
        out.push_str(&encode(key.as_ref()));
        out.push(EQUAL);
        out.push_str(&encode(value.as_ref()));
    }
    out
}

/* Steps:
 *      1. Split on "&", skip empty pairs.
 *      2. Split each pair on first "=", missing value is empty.
 *      3. Decode key and value.
 */
pub fn parse(input: &str) -> Vec<(String, String)> {
    input
        .split(AMBER)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once(EQUAL).unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encode_unreserved() {
        assert_eq!(encode("abc-XYZ_0.9"), "abc-XYZ_0.9");
    }

    #[test]
    fn test_form_encode_delimiters() {
        assert_eq!(encode("a=b&c"), "a%3Db%26c");
        assert_eq!(encode("hello world"), "hello+world");
        assert_eq!(encode("100%20"), "100%2520");
        assert_eq!(encode("~*"), "%7E%2A");
    }

    #[test]
    fn test_form_encode_utf8() {
        assert_eq!(encode("é"), "%C3%A9");
    }

    #[test]
    fn test_form_serialize() {
        let pairs = [("name", "foo"), ("age", "18")];
        assert_eq!(serialize(pairs), "name=foo&age=18");
    }

    #[test]
    fn test_form_serialize_escapes_each_pair() {
        let pairs = [("q", "a&b=c"), ("sp ace", "x y")];
        assert_eq!(serialize(pairs), "q=a%26b%3Dc&sp+ace=x+y");
    }

    #[test]
    fn test_form_serialize_empty() {
        let pairs: [(&str, &str); 0] = [];
        assert_eq!(serialize(pairs), "");
    }

    #[test]
    fn test_form_parse() {
        let result = parse("q=a%26b%3Dc&sp+ace=x+y&&flag");
        assert_eq!(
            result,
            vec![
                ("q".to_string(), "a&b=c".to_string()),
                ("sp ace".to_string(), "x y".to_string()),
                ("flag".to_string(), "".to_string()),
            ]
        );
    }
}
