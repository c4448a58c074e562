//! Stub soreness-log endpoint shared by the integration specs.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// What the stub has seen and how it should answer.
#[derive(Clone, Default)]
pub struct StubLogApi {
    received: Arc<Mutex<Vec<Value>>>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    forced_status: Arc<Mutex<Option<StatusCode>>>,
    bare_status: Arc<Mutex<Option<StatusCode>>>,
}

impl StubLogApi {
    /// Answer 500 for rows with this `body_part`.
    pub fn fail_body_part(&self, body_part: &str) {
        self.failing.lock().unwrap().insert(body_part.to_string());
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
        *self.forced_status.lock().unwrap() = None;
        *self.bare_status.lock().unwrap() = None;
    }

    /// Accept every request but answer with `status` and no body.
    pub fn reply_without_body(&self, status: StatusCode) {
        *self.bare_status.lock().unwrap() = Some(status);
    }

    /// Answer every request with `status`.
    pub fn force_status(&self, status: StatusCode) {
        *self.forced_status.lock().unwrap() = Some(status);
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn received_body_parts(&self) -> Vec<String> {
        let mut parts: Vec<String> = self
            .received()
            .iter()
            .filter_map(|b| b["body_part"].as_str().map(str::to_string))
            .collect();
        parts.sort();
        parts
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.auth_headers.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the API base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .nest(
                "/api/v1",
                Router::new().route("/soreness-logs", post(create_log)),
            )
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server failed");
        });
        format!("http://{}/api/v1", addr)
    }
}

async fn create_log(
    State(stub): State<StubLogApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    stub.received.lock().unwrap().push(body.clone());
    stub.auth_headers.lock().unwrap().push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );

    if let Some(status) = *stub.forced_status.lock().unwrap() {
        return (status, "forced").into_response();
    }
    if let Some(status) = *stub.bare_status.lock().unwrap() {
        return status.into_response();
    }

    let body_part = body["body_part"].as_str().unwrap_or_default().to_string();
    if stub.failing.lock().unwrap().contains(&body_part) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("could not store {}", body_part),
        )
            .into_response();
    }

    let mut created = body;
    created["id"] = json!(uuid::Uuid::new_v4().to_string());
    (StatusCode::CREATED, Json(created)).into_response()
}
