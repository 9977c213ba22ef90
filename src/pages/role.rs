//! Role Selection Page
//!
//! Picks the dashboard the rest of the session lands on.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::models::Role;
use crate::store::{session_role, store_set_role, use_session};

#[component]
pub fn RoleSelect() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    view! {
        <div class="auth-page">
            <div class="auth-card role-card">
                <h2>"Choose your role"</h2>
                {Role::ALL
                    .iter()
                    .map(|&role| {
                        let navigate = navigate.clone();
                        let class = move || {
                            if session_role(&session) == Some(role) { "role-option selected" } else { "role-option" }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    log::info!("[ROLE] {}", role.as_str());
                                    store_set_role(&session, role);
                                    navigate(role.home(), NavigateOptions::default());
                                }
                            >
                                {role.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
