//! Top Navbar Component
//!
//! Navigation bar shared by every signed-in screen.

use leptos::prelude::*;

use crate::store::{session_email, use_session};

#[component]
pub fn TopNav(
    /// Handler for the "Create" button; the button is inert without one
    #[prop(optional)]
    on_create: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="top-navbar">
            <div class="navbar-left">
                <span class="brand">"Projectly"</span>
                <a href="/projects" class="view-link">"Your work"</a>
                <a href="/projects" class="view-link">"Projects"</a>
                <a href="/role" class="view-link">"Dashboards"</a>
                <button
                    class="create-button"
                    on:click=move |_| {
                        if let Some(cb) = on_create {
                            cb.run(());
                        }
                    }
                >
                    "Create"
                </button>
            </div>
            <div class="navbar-right">
                {move || {
                    let email = session_email(&session);
                    (!email.is_empty()).then(|| view! { <span class="session-email">{email}</span> })
                }}
            </div>
        </nav>
    }
}
