//! REST API Bindings
//!
//! Frontend bindings to backend endpoints, organized by domain.

mod client;
mod error;
mod response;

mod auth;
mod boards;
mod events;
mod files;
mod gantt;
mod projects;
mod tasks;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use client::{api_request, get_csrf_token, post_form, post_multipart, Method};
pub use error::{ApiError, SERVER_ERROR_MESSAGE};
pub use response::ApiBody;

// Re-export all endpoint bindings
pub use auth::*;
pub use boards::*;
pub use events::*;
pub use files::*;
pub use gantt::*;
pub use projects::*;
pub use tasks::*;

/// GET a list endpoint, whichever list shape it answers with
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    api_request(Method::Get, path, None).await?.into_list()
}

/// GET a single JSON object
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    api_request(Method::Get, path, None).await?.decode()
}

/// Send `body` as JSON and decode the reply
pub async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    api_request(method, path, Some(value)).await?.decode()
}
