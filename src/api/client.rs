//! HTTP Client
//!
//! Thin `gloo-net` wrapper: attaches credentials and the CSRF header,
//! then hands the raw exchange to `response::interpret`.

use std::cell::RefCell;
use std::fmt;

use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use web_sys::RequestCredentials;

use super::error::ApiError;
use super::response::{self, ApiBody};
use crate::config;

thread_local! {
    /// Anti-forgery token, fetched once per page load
    static CSRF_TOKEN: RefCell<String> = RefCell::new(String::new());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    builder
        .credentials(RequestCredentials::Include)
        .header("X-CSRFToken", &csrf_token())
}

pub fn csrf_token() -> String {
    CSRF_TOKEN.with(|t| t.borrow().clone())
}

/// Fetch the CSRF token and remember it for later requests.
pub async fn get_csrf_token() -> Result<String, ApiError> {
    let url = config::endpoint("/api/auth/csrf/");
    let result = async {
        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Err(ApiError::Http {
                status,
                message: format!("Failed to get CSRF token: {}", status),
                payload: None,
            });
        }
        let content_type = response.headers().get("content-type");
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        response::parse_csrf(content_type.as_deref(), &text)
    }
    .await;

    match result {
        Ok(token) => {
            CSRF_TOKEN.with(|t| *t.borrow_mut() = token.clone());
            Ok(token)
        }
        Err(e) => {
            log::error!("Error getting CSRF token: {}", e);
            Err(e)
        }
    }
}

/// JSON request against an API path.
///
/// `body` is serialized as the request payload when present.
pub async fn api_request(method: Method, path: &str, body: Option<Value>) -> Result<ApiBody, ApiError> {
    let url = config::endpoint(path);
    let builder = builder(method, &url).header("Content-Type", "application/json");
    let request = match body {
        Some(value) => builder.body(value.to_string()),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request, method, &url).await
}

/// `application/x-www-form-urlencoded` POST
pub async fn post_form(path: &str, encoded: String) -> Result<ApiBody, ApiError> {
    let url = config::endpoint(path);
    let request = builder(Method::Post, &url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encoded)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request, Method::Post, &url).await
}

/// Multipart POST; the browser sets the boundary header itself
pub async fn post_multipart(path: &str, form: web_sys::FormData) -> Result<ApiBody, ApiError> {
    let url = config::endpoint(path);
    let request = builder(Method::Post, &url)
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request, Method::Post, &url).await
}

async fn send(request: Request, method: Method, url: &str) -> Result<ApiBody, ApiError> {
    let result = async {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let content_type = response.headers().get("content-type");
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        response::interpret(status, content_type.as_deref(), &text)
    }
    .await;

    if let Err(e) = &result {
        log::error!("API request failed: {} {} status={:?} error={}", method, url, e.status(), e);
    }
    result
}
