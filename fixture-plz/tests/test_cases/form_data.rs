use super::*;

#[test]
fn test_form_data() {
    for data in USERS {
        let builder = RequestBuilder::post("/users").unwrap().form_data(data);
        let request = create(&builder);
        assert_eq!(request.form(), to_owned_pairs(&data));
        assert_eq!(
            request.header("content-type").as_deref(),
            Some("application/x-www-form-urlencoded")
        );
    }
}

#[test]
fn test_form_data_escapes_delimiters() {
    let data = [("q", "a&b=c"), ("note", "hello world"), ("emoji", "\u{2603}")];
    let builder = RequestBuilder::post("/users").unwrap().form_data(data);
    assert_eq!(
        builder.body_as_bytes(),
        b"q=a%26b%3Dc&note=hello+world&emoji=%E2%98%83"
    );
    let request = create(&builder);
    assert_eq!(request.form(), to_owned_pairs(&data));
}

#[test]
fn test_form_data_overwrites_previous_body() {
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .body("a much longer raw body")
        .form_data([("a", "b")]);
    assert_eq!(builder.body_as_bytes(), b"a=b");
    assert_eq!(
        builder.header_map().get("Content-Length"),
        Some(&["3".to_string()][..])
    );
}
