//! Build-time Configuration
//!
//! The backend origin is baked in at compile time from
//! `PROJECTLY_API_BASE_URL`. Unset means same-origin requests.

/// Public Kanban board shown on the board screen
pub const BOARD_ID: u32 = 1;

/// Backend origin without trailing slash
pub fn api_base_url() -> &'static str {
    option_env!("PROJECTLY_API_BASE_URL")
        .unwrap_or("")
        .trim_end_matches('/')
}

/// Absolute URL for an API path such as `/api/projects/`
pub fn endpoint(path: &str) -> String {
    join(api_base_url(), path)
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("", "/api/projects/"), "/api/projects/");
        assert_eq!(join("http://127.0.0.1:8000", "/api/tasks/"), "http://127.0.0.1:8000/api/tasks/");
        assert_eq!(join("http://127.0.0.1:8000/", "api/tasks/"), "http://127.0.0.1:8000/api/tasks/");
    }
}
