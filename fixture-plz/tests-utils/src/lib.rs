use std::path::PathBuf;

pub use fixture_plz::{BuildError, ParseRequest, RequestBuilder};
pub use oneone_plz::{OneOneRequest, ParseError, ParseOptions};

pub const AVATAR: &str = "avatar.png";
pub const README: &str = "README.md";

// Field sets used across the body encoding cases
pub const USERS: [[(&str, &str); 2]; 2] = [
    [("name", "foo"), ("age", "18")],
    [("name", "bar"), ("age", "28")],
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn fixture_size(name: &str) -> usize {
    std::fs::read(fixture_path(name)).unwrap().len()
}

pub fn create(builder: &RequestBuilder) -> OneOneRequest {
    init_tracing();
    builder.create(ParseOptions::default()).unwrap()
}

pub fn to_owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
