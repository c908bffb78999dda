#![allow(dead_code)]

use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use goalpost_core::data_files;
use goalpost_server::app;
use goalpost_server::state::AppState;
use goalpost_storage::store::Store;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub dir: TempDir,
    pub router: Router,
}

impl TestApp {
    pub fn users_on_disk(&self) -> Value {
        let raw = std::fs::read_to_string(data_files::users(self.dir.path()))
            .unwrap_or_else(|err| panic!("failed to read users.json: {err}"));
        serde_json::from_str(&raw).unwrap_or_else(|err| panic!("users.json is not JSON: {err}"))
    }

    pub fn users_raw(&self) -> String {
        std::fs::read_to_string(data_files::users(self.dir.path()))
            .unwrap_or_else(|err| panic!("failed to read users.json: {err}"))
    }

    pub async fn send(&self, method: Method, uri: &str) -> (StatusCode, String, Option<String>) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap_or_else(|err| panic!("failed to build request: {err}")),
            )
            .await
            .unwrap_or_else(|err| panic!("router request failed: {err}"));

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap_or_else(|err| panic!("failed to read response body: {err}"));
        let body = String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|err| panic!("response body is not UTF-8: {err}"));
        (status, body, content_type)
    }

    pub async fn get_json(&self, uri: &str) -> Value {
        let (status, body, content_type) = self.send(Method::GET, uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri} -> {body}");
        assert_eq!(content_type.as_deref(), Some("application/json"));
        serde_json::from_str(&body).unwrap_or_else(|err| panic!("body is not JSON: {err}"))
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, String) {
        let (status, body, _) = self.send(Method::POST, uri).await;
        (status, body)
    }
}

pub fn ids(value: &Value) -> Vec<Value> {
    value
        .as_array()
        .unwrap_or_else(|| panic!("expected an array, got {value}"))
        .iter()
        .map(|record| record["id"].clone())
        .collect()
}

pub fn write_fixtures(dir: &Path, users: Value) {
    let categories = json!([
        { "id": 1, "name": "Fitness" },
        { "id": 2, "name": "Reading" },
        { "id": 3, "name": "Cooking" }
    ]);
    let goals = json!([
        { "id": 1, "description": "run a marathon", "categoryId": "1", "difficulty": 9 },
        { "id": 2, "description": "run a 5k", "categoryId": "1", "difficulty": 2 },
        { "id": 3, "description": "read ten books", "categoryId": 2, "difficulty": 5 },
        { "id": 4, "description": "Run every morning", "categoryId": "4", "difficulty": 5 }
    ]);

    std::fs::write(data_files::categories(dir), categories.to_string()).unwrap();
    std::fs::write(data_files::goals(dir), goals.to_string()).unwrap();
    std::fs::write(data_files::users(dir), users.to_string()).unwrap();
}

pub fn default_users() -> Value {
    json!([
        { "id": 1, "name": "Ada", "acceptedGoals": [], "achievedGoals": [], "challengedGoals": [], "giftedGoals": [] },
        { "id": 2, "name": "Grace", "acceptedGoals": [], "achievedGoals": [], "challengedGoals": [], "giftedGoals": [] }
    ])
}

pub fn test_app_with_users(users: Value) -> TestApp {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("failed to create temp dir: {err}"));
    write_fixtures(dir.path(), users);
    let store = Store::load(dir.path()).unwrap_or_else(|err| panic!("failed to load store: {err}"));
    let router = app(AppState::new(store));
    TestApp { dir, router }
}

pub fn test_app() -> TestApp {
    test_app_with_users(default_users())
}

/// Rebuild the router from whatever is currently in the data directory.
pub fn reload(previous: TestApp) -> TestApp {
    let store = Store::load(previous.dir.path())
        .unwrap_or_else(|err| panic!("failed to load store: {err}"));
    TestApp {
        router: app(AppState::new(store)),
        dir: previous.dir,
    }
}
