//! Serde round-trip tests for LinkedList.
//!
//! Run with `cargo test --features serde`.

use rstest::rstest;
use slink::LinkedList;

#[rstest]
fn test_serialize_as_sequence() {
    let list: LinkedList<i32> = (1..=3).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_serialize_empty_list() {
    let list: LinkedList<i32> = LinkedList::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");
}

#[rstest]
fn test_deserialize_preserves_order() {
    let list: LinkedList<String> = serde_json::from_str(r#"["a", "b", "c"]"#).unwrap();
    assert_eq!(
        list.to_vec(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
    assert_eq!(list.len(), 3);
}

#[rstest]
fn test_round_trip() {
    let original: LinkedList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&original).unwrap();
    let restored: LinkedList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<LinkedList<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}
