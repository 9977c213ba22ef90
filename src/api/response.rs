//! Response Interpretation
//!
//! Turns (status, content-type, body text) into one result shape.
//! Kept free of any browser types so it runs under plain `cargo test`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Successful response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// Deserialize into `T`; text bodies are tried as JSON too
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = match self {
            ApiBody::Json(value) => value,
            ApiBody::Text(text) => {
                serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?
            }
        };
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Deserialize a list endpoint, accepting a raw array or `{results: [...]}`
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        let value = match self {
            ApiBody::Json(value) => value,
            ApiBody::Text(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
        };
        normalize_list(value)
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|e| ApiError::Decode(e.to_string())))
            .collect()
    }
}

pub fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

fn is_html_page(text: &str) -> bool {
    text.to_ascii_lowercase().contains("<!doctype")
}

/// Flatten the two list shapes the backend uses; anything else is empty
pub fn normalize_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Normalize a completed HTTP exchange
pub fn interpret(status: u16, content_type: Option<&str>, body: &str) -> Result<ApiBody, ApiError> {
    let ok = (200..300).contains(&status);

    if ok {
        if is_json(content_type) && !body.trim().is_empty() {
            return serde_json::from_str(body)
                .map(ApiBody::Json)
                .map_err(|e| ApiError::Decode(e.to_string()));
        }
        return Ok(ApiBody::Text(body.to_string()));
    }

    if is_json(content_type) {
        if let Ok(payload) = serde_json::from_str::<Value>(body) {
            let message = ["error", "message", "detail"]
                .iter()
                .find_map(|key| payload.get(*key).and_then(Value::as_str))
                .unwrap_or("Request failed")
                .to_string();
            return Err(ApiError::Http { status, message, payload: Some(payload) });
        }
    }

    if is_html_page(body) {
        return Err(ApiError::ServerError { status });
    }

    let message = if body.trim().is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    };
    Err(ApiError::Http { status, message, payload: None })
}

/// Extract `csrfToken` from the CSRF endpoint's body
pub fn parse_csrf(content_type: Option<&str>, body: &str) -> Result<String, ApiError> {
    if !is_json(content_type) {
        let preview: String = body.chars().take(50).collect();
        return Err(ApiError::Decode(format!("Expected JSON response, got: {}", preview)));
    }
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    value
        .get("csrfToken")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::Decode("missing csrfToken".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::SERVER_ERROR_MESSAGE;
    use serde_json::json;

    const JSON: Option<&str> = Some("application/json");
    const HTML: Option<&str> = Some("text/html; charset=utf-8");

    #[test]
    fn test_ok_json_is_parsed() {
        let body = interpret(200, JSON, r#"{"a":1}"#).unwrap();
        assert_eq!(body, ApiBody::Json(json!({"a": 1})));
    }

    #[test]
    fn test_ok_json_with_charset() {
        let body = interpret(201, Some("Application/JSON; charset=utf-8"), "[1,2]").unwrap();
        assert_eq!(body, ApiBody::Json(json!([1, 2])));
    }

    #[test]
    fn test_ok_non_json_is_text() {
        let body = interpret(200, Some("text/plain"), "pong").unwrap();
        assert_eq!(body, ApiBody::Text("pong".into()));
    }

    #[test]
    fn test_ok_malformed_json_is_decode_error() {
        let err = interpret(200, JSON, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_html_error_page_gets_generic_message() {
        let page = "<!DOCTYPE html><html><body><h1>Server Error (500)</h1></body></html>";
        let err = interpret(500, HTML, page).unwrap_err();
        assert_eq!(err, ApiError::ServerError { status: 500 });
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
        assert!(!err.to_string().contains("<html>"));
    }

    #[test]
    fn test_json_error_keeps_payload() {
        let err = interpret(400, JSON, r#"{"errors":{"email":["taken"]}}"#).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Request failed");
        assert_eq!(err.payload(), Some(&json!({"errors": {"email": ["taken"]}})));

        let err = interpret(403, JSON, r#"{"error":"Forbidden"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Forbidden");
    }

    #[test]
    fn test_plain_text_error() {
        let err = interpret(404, Some("text/plain"), "Not here").unwrap_err();
        assert_eq!(err.to_string(), "Not here");

        let err = interpret(503, None, "").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 503");
    }

    #[test]
    fn test_normalize_list_shapes() {
        assert_eq!(normalize_list(json!([1, 2])), vec![json!(1), json!(2)]);
        assert_eq!(normalize_list(json!({"count": 1, "results": [3]})), vec![json!(3)]);
        assert!(normalize_list(json!({"detail": "nope"})).is_empty());
        assert!(normalize_list(Value::Null).is_empty());
    }

    #[test]
    fn test_into_list_decodes_paged_body() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: u32,
        }
        let body = ApiBody::Json(json!({"results": [{"id": 1}, {"id": 2}]}));
        assert_eq!(body.into_list::<Row>().unwrap(), vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_parse_csrf() {
        assert_eq!(parse_csrf(JSON, r#"{"csrfToken":"abc"}"#).unwrap(), "abc");

        let err = parse_csrf(HTML, "<!DOCTYPE html>").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected response: Expected JSON response, got: <!DOCTYPE html>");
    }
}
