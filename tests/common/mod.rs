#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use sapiencia_api::config::AppConfig;
use sapiencia_api::database::{DatabaseManager, MemoryCredentialStore};
use sapiencia_api::state::AppState;

pub const ADMIN: (&str, &str) = ("admin", "admin-password");
pub const USER: (&str, &str) = ("jperez", "user-password");
pub const DISABLED: (&str, &str) = ("inactivo", "disabled-password");

/// Development config, lazily connected pools (nothing is reached unless a
/// handler runs a query) and an in-memory credential store.
pub async fn test_state() -> AppState {
    let config = AppConfig::development();
    let databases = DatabaseManager::connect_lazy(&config.database);
    state_with(config, databases).await
}

pub async fn state_with(config: AppConfig, databases: DatabaseManager) -> AppState {
    let store = MemoryCredentialStore::new();
    store.insert(ADMIN.0, Some("Administrador"), ADMIN.1, true).await;
    store.insert(USER.0, Some("Juan Pérez"), USER.1, true).await;
    store.insert(DISABLED.0, None, DISABLED.1, false).await;

    AppState::with_parts(config, databases, Arc::new(store)).expect("valid token config")
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (sapiencia_api::app(state.clone()), state)
}

/// Issue a token directly, skipping the login round trip.
pub fn token_for(state: &AppState, username: &str, full_name: Option<&str>) -> String {
    state.tokens.issue(username, full_name).expect("token")
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request")
}

/// Send one request through the router; returns the status and the parsed
/// JSON body (`Null` when empty or not JSON).
pub async fn send(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Ok((status, body))
}

pub async fn login(app: &Router, username: &str, password: &str) -> Result<(StatusCode, Value)> {
    let body = serde_json::json!({ "username": username, "password": password });
    send(app, request(Method::POST, "/login", None, Some(body))).await
}
