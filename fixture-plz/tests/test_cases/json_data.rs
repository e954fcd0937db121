use std::collections::BTreeMap;

use serde_json::{Value, json};

use super::*;

#[test]
fn test_json_data() {
    for data in USERS {
        let map: BTreeMap<&str, &str> = data.into_iter().collect();
        let builder = RequestBuilder::post("/users")
            .unwrap()
            .json_data(&map)
            .unwrap();
        let request = create(&builder);
        let decoded: BTreeMap<String, String> = request.json().unwrap();
        let expected: BTreeMap<String, String> = to_owned_pairs(&data).into_iter().collect();
        assert_eq!(decoded, expected);
        assert_eq!(
            request.header("content-type").as_deref(),
            Some("application/json")
        );
    }
}

#[test]
fn test_json_data_nested() {
    let data = json!({"name": "foo", "tags": ["a", "b"], "meta": {"age": 18}});
    let builder = RequestBuilder::post("/users")
        .unwrap()
        .json_data(&data)
        .unwrap();
    let request = create(&builder);
    let decoded: Value = request.json().unwrap();
    assert_eq!(decoded, data);
    assert!(request.form().is_empty());
}

#[test]
fn test_json_data_non_string_keys() {
    let mut data = BTreeMap::new();
    data.insert((1, 2), "x");
    let result = RequestBuilder::post("/users").unwrap().json_data(&data);
    assert!(matches!(result, Err(BuildError::Json(_))));
}
