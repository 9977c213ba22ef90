//! Attachments Page

use leptos::prelude::*;

use crate::components::{FileDropBox, ProjectSidebar, ProjectTabs, TopNav};

#[component]
pub fn Attachments() -> impl IntoView {
    view! {
        <div class="page">
            <TopNav />
            <div class="page-body">
                <ProjectSidebar recent=Signal::derive(|| None::<String>) />
                <main class="main-content">
                    <ProjectTabs active="/attachments" />
                    <FileDropBox title="Attachments" />
                </main>
            </div>
        </div>
    }
}
