use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// A request the mock accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Debug, Default)]
pub struct MockState {
    credentials: Option<(String, String)>,
    recorded: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `Authorization: Basic` with these credentials on every request.
    pub fn with_basic_auth(mut self, user: &str, pass: &str) -> Self {
        self.credentials = Some((user.to_string(), pass.to_string()));
        self
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.read().await.clone()
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let Some((user, pass)) = &self.credentials else {
            return true;
        };
        let decoded = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Basic "))
            .and_then(|v| STANDARD.decode(v).ok())
            .and_then(|v| String::from_utf8(v).ok());
        decoded.as_deref() == Some(format!("{user}:{pass}").as_str())
    }
}

pub fn query_success_response() -> Value {
    json!({
        "results": [{
            "columns": ["id", "name"],
            "types": ["integer", "text"],
            "values": [[1, "fiona"]]
        }]
    })
}

pub fn execute_success_response() -> Value {
    json!({
        "results": [{
            "last_insert_id": 1,
            "rows_affected": 1
        }]
    })
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/{*path}", get(handle).post(handle))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    if !state.authorized(&headers) {
        tracing::info!(%method, path = uri.path(), "rejecting unauthenticated request");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let body = if method == Method::POST {
        let statements: Vec<String> =
            serde_json::from_slice(&body).map_err(|_| StatusCode::BAD_REQUEST)?;
        Some(json!(statements))
    } else {
        None
    };

    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    };
    tracing::debug!(method = %recorded.method, path = %recorded.path, "recorded request");
    state.recorded.write().await.push(recorded);

    if method == Method::POST {
        Ok(Json(execute_success_response()))
    } else {
        Ok(Json(query_success_response()))
    }
}
