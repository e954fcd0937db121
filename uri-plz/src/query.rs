use std::fmt;

use crate::form_urlencoded;

// Raw query without the leading "?"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    raw: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        Query { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    // Decoded key value pairs in order
    pub fn pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(&self.raw)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.pairs()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
