use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// A single todo item in the wire format the client expects: camelCase
/// field names, integer ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// Read-only seeded dataset. The client under test only issues GETs, so
/// there is nothing to lock.
pub type Db = Arc<BTreeMap<u64, Todo>>;

/// Fixed todos served by every instance, keyed and listed by ascending id.
pub fn seed() -> BTreeMap<u64, Todo> {
    [
        Todo {
            id: 1,
            user_id: 1,
            title: "Buy milk".to_string(),
            completed: false,
        },
        Todo {
            id: 2,
            user_id: 1,
            title: "Walk the dog".to_string(),
            completed: true,
        },
        Todo {
            id: 3,
            user_id: 2,
            title: "File taxes".to_string(),
            completed: false,
        },
    ]
    .into_iter()
    .map(|todo| (todo.id, todo))
    .collect()
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(todos: BTreeMap<u64, Todo>) -> Router {
    let db: Db = Arc::new(todos);
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
        .route("/echo", get(echo_headers))
        .route("/error/{status}", get(error_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.values().cloned().collect())
}

/// Unknown ids answer 404 with an empty JSON object body, matching the
/// public todo API this server mirrors.
async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, (StatusCode, Json<serde_json::Value>)> {
    db.get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, Json(serde_json::json!({}))))
}

/// Echo the request headers back as a JSON object so client tests can
/// assert what actually arrived on the wire.
async fn echo_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let echoed = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    Json(echoed)
}

/// Failure injection: respond with the requested status and a plain body.
async fn error_status(Path(status): Path<u16>) -> (StatusCode, String) {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, format!("simulated failure: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_camel_case() {
        let todo = Todo {
            id: 1,
            user_id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            user_id: 3,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, todo.id);
        assert_eq!(back.user_id, todo.user_id);
        assert_eq!(back.title, todo.title);
        assert_eq!(back.completed, todo.completed);
    }

    #[test]
    fn seed_lists_in_ascending_id_order() {
        let ids: Vec<u64> = seed().values().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
