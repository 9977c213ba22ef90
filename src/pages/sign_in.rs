//! Sign-In Page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::store::{store_sign_in, use_session};

#[component]
pub fn SignIn() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked().trim().to_string();
        log::info!("[SIGN-IN] {}", value);
        store_sign_in(&session, value);
        navigate("/role", NavigateOptions::default());
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Projectly"</h1>
                <h2>"Sign in to continue"</h2>
                <input
                    type="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Continue"</button>
                <p class="auth-switch">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
