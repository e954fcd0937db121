use super::*;

#[test]
fn test_create_idempotent() {
    let builder = RequestBuilder::put("/users/foo?notify=1")
        .unwrap()
        .host("localhost")
        .form_data(USERS[0]);
    let first = create(&builder);
    let second = create(&builder);
    assert_eq!(first.method(), second.method());
    assert_eq!(first.path(), second.path());
    assert_eq!(first.query(), second.query());
    assert_eq!(first.header_map(), second.header_map());
    assert_eq!(first.body(), second.body());
    assert_eq!(first.form(), second.form());
    assert_eq!(builder.message(), builder.message());
}

#[test]
fn test_build_default_options() {
    init_tracing();
    let builder = RequestBuilder::delete("/users/bar").unwrap();
    let request: OneOneRequest = builder.build().unwrap();
    assert!(request.is_parsed());
    assert_eq!(request.options(), &ParseOptions::default());
}

#[test]
fn test_create_with_options() {
    init_tracing();
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .form_data(USERS[0]);
    let options: ParseOptions = serde_json::from_str(r#"{"parse_body": false}"#).unwrap();
    let request: OneOneRequest = builder.create(options).unwrap();
    assert!(request.form().is_empty());
    assert_eq!(request.body(), b"name=foo&age=18");
}

#[test]
fn test_create_body_too_large() {
    init_tracing();
    let builder = RequestBuilder::post("/users").unwrap().body("0123456789");
    let options = ParseOptions {
        max_body_size: 4,
        ..Default::default()
    };
    let result = builder.create::<OneOneRequest>(options);
    assert!(matches!(result, Err(BuildError::MessageParse(_))));
}

#[test]
fn test_create_unsupported_protocol() {
    init_tracing();
    let builder = RequestBuilder::get("/").unwrap().protocol("HTTP/2");
    let err = builder.build::<OneOneRequest>().unwrap_err();
    let BuildError::MessageParse(source) = err else {
        panic!("expected MessageParse");
    };
    let source = source.downcast::<ParseError>().unwrap();
    assert!(matches!(*source, ParseError::Version(_)));
}

#[test]
fn test_create_empty_uri() {
    init_tracing();
    let builder = RequestBuilder::get("").unwrap();
    let err = builder.build::<OneOneRequest>().unwrap_err();
    assert!(matches!(err, BuildError::MessageParse(_)));
}

#[test]
fn test_create_absolute_uri() {
    let builder = RequestBuilder::get("http://localhost:8080/users?name=foo").unwrap();
    let request = create(&builder);
    assert_eq!(request.path(), "/users");
    assert_eq!(request.query_value("name"), Some("foo"));
    let uri = request.uri().unwrap();
    assert_eq!(uri.host(), Some("localhost"));
    assert_eq!(uri.port(), Some(8080));
}
