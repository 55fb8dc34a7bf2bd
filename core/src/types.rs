//! Domain records decoded from response bodies.
//!
//! # Design
//! The wire format is camelCase (`userId`); serde renames on decode so the
//! rest of the crate sees the domain's snake_case names. Decoding is the
//! validation step: a missing field or a type mismatch fails the decode
//! immediately rather than producing a half-built record. Types mirror the
//! mock-server's schema but are defined independently; integration tests
//! catch schema drift.

use serde::{Deserialize, Serialize};

/// A single todo item as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_renames_camel_case_fields() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"userId":7,"title":"Buy milk","completed":false}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.user_id, 7);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn encode_emits_camel_case_fields() {
        let todo = Todo {
            id: 2,
            user_id: 9,
            title: "Walk the dog".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["userId"], 9);
        assert_eq!(json["title"], "Walk the dog");
        assert_eq!(json["completed"], true);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn decode_rejects_missing_field() {
        let result: Result<Todo, _> =
            serde_json::from_str(r#"{"id":1,"title":"No owner","completed":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn decode_rejects_wrong_field_type() {
        let result: Result<Todo, _> =
            serde_json::from_str(r#"{"id":"one","userId":7,"title":"Bad id","completed":false}"#);
        assert!(result.is_err());
    }
}
