use super::*;

fn boundary(request: &OneOneRequest) -> String {
    let content_type = request.header("Content-Type").unwrap();
    let boundary = content_type
        .strip_prefix("multipart/form-data; boundary=")
        .unwrap();
    assert_eq!(boundary.len(), 6);
    assert!(boundary.bytes().all(|b| b.is_ascii_uppercase()));
    boundary.to_string()
}

#[test]
fn test_multipart() {
    for data in USERS {
        let builder = RequestBuilder::post("/users")
            .unwrap()
            .multipart(data)
            .unwrap();
        let request = create(&builder);
        boundary(&request);
        assert_eq!(request.form(), to_owned_pairs(&data));
        assert!(request.files().is_empty());
    }
}

#[test]
fn test_multipart_body_layout() {
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .multipart([("name", "foo")])
        .unwrap();
    let request = create(&builder);
    let b = boundary(&request);
    let verify = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"name\"\r\n\r\n\
         foo\r\n\
         --{b}--"
    );
    assert_eq!(request.body(), verify.as_bytes());
    assert_eq!(
        request.header("Content-Length"),
        Some(verify.len().to_string())
    );
}

#[test]
fn test_multipart_with_one_file() {
    let files = [("avatar", fixture_path(AVATAR))];
    for data in USERS {
        let builder = RequestBuilder::post("/users")
            .unwrap()
            .multipart_with_files(data, files.clone())
            .unwrap();
        let request = create(&builder);
        assert_eq!(request.form(), to_owned_pairs(&data));
        assert_eq!(request.files().len(), 1);
        let file = request.file("avatar").unwrap();
        assert_eq!(file.filename(), AVATAR);
        assert_eq!(file.content_type(), Some("application/octet-stream"));
        assert_eq!(file.size(), fixture_size(AVATAR));
    }
}

#[test]
fn test_multipart_with_two_files() {
    let files = [
        ("avatar", fixture_path(AVATAR)),
        ("readme", fixture_path(README)),
    ];
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .multipart_with_files(USERS[0], files)
        .unwrap();
    let request = create(&builder);
    assert_eq!(request.files().len(), 2);
    assert_eq!(request.file("avatar").unwrap().size(), fixture_size(AVATAR));
    assert_eq!(request.file("readme").unwrap().size(), fixture_size(README));
    assert_eq!(request.file("readme").unwrap().filename(), README);
}

#[test]
fn test_multipart_file_contents_unchanged() {
    let builder = RequestBuilder::post("/upload")
        .unwrap()
        .multipart_with_files([("k", "v")], [("avatar", fixture_path(AVATAR))])
        .unwrap();
    let request = create(&builder);
    let expected = std::fs::read(fixture_path(AVATAR)).unwrap();
    assert_eq!(&request.file("avatar").unwrap().data()[..], &expected[..]);
}

#[test]
fn test_multipart_files_not_uploaded() {
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .multipart_with_files(USERS[1], [("avatar", fixture_path(AVATAR))])
        .unwrap();
    let options = ParseOptions {
        upload_files: false,
        ..Default::default()
    };
    let request: OneOneRequest = builder.create(options).unwrap();
    assert!(request.files().is_empty());
    assert_eq!(request.form(), to_owned_pairs(&USERS[1]));
}

#[test]
fn test_multipart_missing_file() {
    let missing = fixture_path("missing.bin");
    let result = RequestBuilder::post("/users")
        .unwrap()
        .multipart_with_files(USERS[0], [("avatar", missing.clone())]);
    match result {
        Err(BuildError::FileRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected FileRead, got {:?}", other.map(|_| ())),
    }
}
