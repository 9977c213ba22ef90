//! Registration Form Validation
//!
//! Advisory client-side checks; the backend stays authoritative.
//! Server-side field errors map back onto the same slots.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::api::RegisterRequest;
use crate::models::Role;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Registration form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegistrationForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Role,
}

impl Field {
    /// Map a backend error key onto a form slot
    pub fn from_server_key(key: &str) -> Option<Field> {
        match key {
            "name" | "full_name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "confirmPassword" | "confirm_password" => Some(Field::ConfirmPassword),
            "role" => Some(Field::Role),
            _ => None,
        }
    }
}

/// One optional message per form field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub role: Option<String>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Role => &mut self.role,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::ConfirmPassword => self.confirm_password.as_deref(),
            Field::Role => self.role.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.role.is_none()
    }
}

/// Unmet password requirements, in display order
pub fn validate_password(password: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if password.chars().count() < 8 {
        missing.push("At least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("At least one number");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("At least one uppercase letter");
    }
    missing
}

pub fn validate_registration(form: &RegistrationForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.set(Field::Name, "Full name is required");
    }

    if form.email.trim().is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&form.email) {
        errors.set(Field::Email, "Invalid email format");
    }

    let missing = validate_password(&form.password);
    if !missing.is_empty() {
        errors.set(Field::Password, missing.join(", "));
    }

    if form.password != form.confirm_password {
        errors.set(Field::ConfirmPassword, "Passwords do not match");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Pull `{errors: {field: msg | [msg, ...]}}` out of a backend error body.
/// Returns `None` when the body carries no recognizable field errors.
pub fn field_errors_from_server(payload: &Value) -> Option<FieldErrors> {
    let map = payload.get("errors")?.as_object()?;
    let mut errors = FieldErrors::default();

    for (key, message) in map {
        let Some(field) = Field::from_server_key(key) else {
            continue;
        };
        let text = match message {
            Value::Array(parts) => parts
                .iter()
                .map(|p| p.as_str().map(str::to_string).unwrap_or_else(|| p.to_string()))
                .collect::<Vec<_>>()
                .join(" "),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        errors.set(field, text);
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}
