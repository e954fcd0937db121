use super::*;

fn assert_method_and_path(builder: RequestBuilder, method: &str, path: &str) {
    let request = create(&builder);
    assert_eq!(request.method(), method);
    assert_eq!(request.path(), path);
}

#[test]
fn test_get() {
    assert_method_and_path(RequestBuilder::get("/").unwrap(), "GET", "/");
}

#[test]
fn test_post() {
    assert_method_and_path(RequestBuilder::post("/users").unwrap(), "POST", "/users");
}

#[test]
fn test_put() {
    assert_method_and_path(RequestBuilder::put("/users/foo").unwrap(), "PUT", "/users/foo");
}

#[test]
fn test_delete() {
    assert_method_and_path(
        RequestBuilder::delete("/users/bar").unwrap(),
        "DELETE",
        "/users/bar",
    );
}

#[test]
fn test_new_lowercase_method() {
    assert_method_and_path(RequestBuilder::new("options", "/ping").unwrap(), "OPTIONS", "/ping");
    assert_method_and_path(RequestBuilder::new("purge", "/cache").unwrap(), "PURGE", "/cache");
}

#[test]
fn test_path_without_query() {
    let builder = RequestBuilder::get("/search?q=rust+lang&page=2").unwrap();
    let request = create(&builder);
    assert_eq!(request.path(), "/search");
    assert_eq!(request.query_value("q"), Some("rust lang"));
    assert_eq!(request.query_value("page"), Some("2"));
}

#[test]
fn test_invalid_uri() {
    for uri in ["/a b", "/%zz", "1http://example.com", "http://host:port/"] {
        let result = RequestBuilder::get(uri);
        assert!(matches!(result, Err(BuildError::InvalidUri(_))), "{}", uri);
    }
}
