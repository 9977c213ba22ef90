//! Manager File Sharing Page

use leptos::prelude::*;

use crate::components::{FileDropBox, RoleSidebar, TopNav};
use crate::models::Role;

#[component]
pub fn FileSharing() -> impl IntoView {
    view! {
        <div class="page">
            <TopNav />
            <div class="page-body">
                <RoleSidebar role=Role::ProgramManager />
                <main class="main-content">
                    <h2>"File Sharing"</h2>
                    <FileDropBox title="Share files with the team" />
                </main>
            </div>
        </div>
    }
}
