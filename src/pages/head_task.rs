//! Head of Committee Task Page

use leptos::prelude::*;
use leptos_toast::{ToastStack, Toasts};

use crate::components::{RoleSidebar, TaskWorkspace, TopNav};
use crate::models::Role;

#[component]
pub fn HeadTask() -> impl IntoView {
    let toasts = Toasts::new();
    let show_form = RwSignal::new(false);

    view! {
        <div class="page">
            <TopNav on_create=Callback::new(move |_: ()| show_form.set(true)) />
            <div class="page-body">
                <RoleSidebar role=Role::Head />
                <main class="main-content">
                    <h2>"Committee Tasks"</h2>
                    <TaskWorkspace toasts=toasts show_form=show_form />
                </main>
            </div>
            <ToastStack toasts=toasts />
        </div>
    }
}
