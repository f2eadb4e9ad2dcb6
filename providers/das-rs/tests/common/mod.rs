//! Fake Helius JSON-RPC endpoint for integration tests

use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A canned reply: status, extra headers, raw body
pub type CannedReply = (StatusCode, Vec<(&'static str, &'static str)>, String);

/// A request received by the fake endpoint
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct FakeHelius {
    replies: Arc<Mutex<VecDeque<CannedReply>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeHelius {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// JSON-RPC success body carrying `result`
pub fn rpc_result(result: Value) -> CannedReply {
    let body = serde_json::json!({ "jsonrpc": "2.0", "id": "das-provider", "result": result });
    (StatusCode::OK, vec![], body.to_string())
}

/// JSON-RPC error body
pub fn rpc_error(code: i64, message: &str) -> CannedReply {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": "das-provider",
        "error": { "code": code, "message": message }
    });
    (StatusCode::OK, vec![], body.to_string())
}

async fn handle_rpc(
    State(fake): State<FakeHelius>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    fake.requests
        .lock()
        .unwrap()
        .push(CapturedRequest { query, body });

    let reply = fake.replies.lock().unwrap().pop_front();
    let (status, headers, body) = reply.unwrap_or_else(|| rpc_result(Value::Null));

    let mut response = (status, body).into_response();
    for (name, value) in headers {
        response
            .headers_mut()
            .insert(name, HeaderValue::from_static(value));
    }
    response
}

/// Starts the fake endpoint on an ephemeral port and returns its base URL
pub async fn spawn_fake_helius(replies: Vec<CannedReply>) -> (String, FakeHelius) {
    let fake = FakeHelius {
        replies: Arc::new(Mutex::new(replies.into())),
        requests: Arc::default(),
    };

    let app = Router::new()
        .route("/", post(handle_rpc))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), fake)
}
