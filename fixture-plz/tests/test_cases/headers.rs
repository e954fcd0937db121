use super::*;

#[test]
fn test_headers() {
    let builder = RequestBuilder::get("/")
        .unwrap()
        .headers([("Host", ["localhost"]), ("Content-Type", ["text/html"])]);
    let request = create(&builder);
    assert_eq!(request.header("host").as_deref(), Some("localhost"));
    assert_eq!(request.header("content-type").as_deref(), Some("text/html"));
}

#[test]
fn test_add_header_joined_in_order() {
    let builder = RequestBuilder::get("/")
        .unwrap()
        .add_header("X-Foo", "Bar")
        .add_header("X-Foo", "Fizz");
    let request = create(&builder);
    assert_eq!(request.header("x-foo").as_deref(), Some("Bar, Fizz"));
}

#[test]
fn test_set_header_discards_previous() {
    let builder = RequestBuilder::get("/")
        .unwrap()
        .add_header("X-Foo", "Bar")
        .add_header("X-Foo", "Fizz")
        .set_header("X-Foo", ["Buzz", "Fuzz"]);
    let request = create(&builder);
    assert_eq!(request.header("X-Foo").as_deref(), Some("Buzz, Fuzz"));
}

#[test]
fn test_header_order_is_insertion_order() {
    let builder = RequestBuilder::get("/")
        .unwrap()
        .host("localhost")
        .add_header("Accept", "*/*")
        .host("127.0.0.1");
    let verify = "GET / HTTP/1.1\r\n\
                  Host: 127.0.0.1\r\n\
                  Accept: */*\r\n\r\n";
    assert_eq!(builder.message(), verify);
}

#[test]
fn test_body_sets_content_length() {
    let builder = RequestBuilder::post("/users").unwrap().body("foo");
    let request = create(&builder);
    assert_eq!(request.header("Content-Length").as_deref(), Some("3"));
    assert_eq!(request.body(), b"foo");
}

#[test]
fn test_content_length_mismatch_is_rejected() {
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .body("foo")
        .content_length(10);
    let result = builder.create::<OneOneRequest>(ParseOptions::default());
    assert!(matches!(result, Err(BuildError::MessageParse(_))));
}

#[test]
fn test_add_header_names_differing_in_case() {
    let builder = RequestBuilder::get("/")
        .unwrap()
        .add_header("x-foo", "a")
        .add_header("X-Foo", "b");
    assert_eq!(
        builder.message(),
        "GET / HTTP/1.1\r\nx-foo: a\r\nX-Foo: b\r\n\r\n"
    );
    let request = create(&builder);
    assert_eq!(request.header("X-FOO").as_deref(), Some("a, b"));
    assert_eq!(request.header_map().unwrap().headers().len(), 1);
}
