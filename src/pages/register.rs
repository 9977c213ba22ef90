//! Registration Page
//!
//! Client-side checks first, then the backend's verdict mapped onto the
//! same per-field slots.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use serde_json::Value;

use crate::api::{self, ApiError};
use crate::lifecycle::Alive;
use crate::models::Role;
use crate::validation::{field_errors_from_server, validate_registration, Field, FieldErrors, RegistrationForm};

/// Banner text for a failed registration without per-field errors
fn banner_message(err: &ApiError) -> String {
    match err.payload() {
        Some(payload) => payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Registration failed")
            .to_string(),
        None => err.to_string(),
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let alive = Alive::new();
    let navigate = use_navigate();
    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let banner = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Err(e) = api::get_csrf_token().await {
                log::error!("[REGISTER] CSRF token unavailable: {}", e);
            }
        });
    });

    let edit = move |field: Field, value: String| {
        form.update(|f| match field {
            Field::Name => f.name = value,
            Field::Email => f.email = value,
            Field::Password => f.password = value,
            Field::ConfirmPassword => f.confirm_password = value,
            Field::Role => f.role = Role::from_str(&value),
        });
        errors.update(|e| e.clear(field));
    };

    let field_error = move |field: Field| {
        move || errors.with(|e| e.get(field).map(|m| view! { <span class="field-error">{m.to_string()}</span> }))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(found) = validate_registration(&current) {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::default());
        banner.set(None);
        submitting.set(true);

        let request = current.to_request();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&request).await;
            if !alive.get() {
                return;
            }
            submitting.try_set(false);
            match result {
                Ok(_) => {
                    log::info!("[REGISTER] Registered {}", request.email);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("[REGISTER] {}", e);
                    match e.payload().and_then(field_errors_from_server) {
                        Some(found) => {
                            errors.try_set(found);
                        }
                        None => {
                            banner.try_set(Some(banner_message(&e)));
                        }
                    }
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card register-card" on:submit=on_submit>
                <h2>"Create your account"</h2>
                {move || banner.get().map(|b| view! { <div class="error-banner">{b}</div> })}

                <label>"Full name"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                    />
                </label>
                {field_error(Field::Name)}

                <label>"Email"
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                    />
                </label>
                {field_error(Field::Email)}

                <label>"Password"
                    <input
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| edit(Field::Password, event_target_value(&ev))
                    />
                </label>
                {field_error(Field::Password)}

                <label>"Confirm password"
                    <input
                        type="password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| edit(Field::ConfirmPassword, event_target_value(&ev))
                    />
                </label>
                {field_error(Field::ConfirmPassword)}

                <label>"Role"
                    <select
                        prop:value=move || form.with(|f| f.role.as_str())
                        on:change=move |ev| edit(Field::Role, event_target_value(&ev))
                    >
                        {Role::ALL
                            .iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                {field_error(Field::Role)}

                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already have an account? " <a href="/">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
