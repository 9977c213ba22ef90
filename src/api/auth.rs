//! Auth Endpoints

use serde::Serialize;

use crate::models::Role;
use super::{api_request, ApiBody, ApiError, Method};

/// Registration payload, field names as the backend expects them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub role: Role,
}

pub async fn register(request: &RegisterRequest) -> Result<ApiBody, ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Encode(e.to_string()))?;
    api_request(Method::Post, "/api/auth/register/", Some(body)).await
}
