//! Request handlers

use crate::client_ip::ClientIp;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use serde_json::{json, Map, Value};

fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResponse {
    let session = if state.http.client().is_ok() {
        "open"
    } else {
        "closed"
    };

    ApiResponse::new(payload(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "session": session,
    })))
}

/// Echo the caller's resolved address
pub async fn whoami(ClientIp(ip): ClientIp) -> ApiResponse {
    ApiResponse::new(payload(json!({ "ip": ip.to_string() })))
}
