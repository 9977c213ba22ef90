//! Manager Sub-Task Page
//!
//! Tasks with their subtasks, the latest projects, and task creation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::{ToastStack, Toasts};

use crate::api;
use crate::components::{ProjectDetailsModal, RoleSidebar, TaskWorkspace, TopNav};
use crate::lifecycle::Alive;
use crate::models::{Project, Role, Task};
use crate::recent::{self, card_status, recent_projects, ProjectDetails};

/// True when `task` points at a project the recent list does not show
fn references_unknown_project(task: &Task, recent: &[Project]) -> bool {
    match task.project.as_ref().and_then(|p| p.as_u32()) {
        Some(id) => !recent.iter().any(|p| p.id == id),
        None => false,
    }
}

#[component]
pub fn SubTask() -> impl IntoView {
    let alive = Alive::new();
    let toasts = Toasts::new();
    let show_form = RwSignal::new(false);
    let projects = RwSignal::new(Vec::<Project>::new());
    let selected = RwSignal::new(None::<ProjectDetails>);
    let reload_projects = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload_projects.track();
        spawn_local(async move {
            let result = api::list_projects().await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(list) => {
                    projects.try_set(recent_projects(list));
                }
                Err(e) => {
                    log::error!("[SUBTASK] Projects unavailable: {}", e);
                    toasts.error(recent::fetch_error(&e));
                }
            }
        });
    });

    let on_created = Callback::new(move |task: Task| {
        if projects.with_untracked(|recent| references_unknown_project(&task, recent)) {
            reload_projects.update(|n| *n += 1);
        }
    });
    let close = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="page">
            <TopNav on_create=Callback::new(move |_: ()| show_form.set(true)) />
            <div class="page-body">
                <RoleSidebar role=Role::ProgramManager />
                <main class="main-content dashboard">
                    <h2>"Sub Tasks"</h2>
                    <TaskWorkspace
                        toasts=toasts
                        show_form=show_form
                        with_subtasks=true
                        require_project=true
                        on_created=on_created
                    />

                    <section class="recent-section">
                        <h3>"Last Projects Created"</h3>
                        <Show
                            when=move || projects.with(|p| !p.is_empty())
                            fallback=|| view! { <p class="empty">"No projects yet"</p> }
                        >
                            <div class="project-cards">
                                <For
                                    each=move || projects.get()
                                    key=|p| p.id
                                    children=move |project| {
                                        let details = ProjectDetails::from_project(&project, "Unknown");
                                        view! {
                                            <div class="project-card">
                                                <h4>{project.name.clone()}</h4>
                                                <span class="status-badge">{card_status(&project)}</span>
                                                <span class="created">{details.created_at.clone()}</span>
                                                <button
                                                    class="view-btn"
                                                    on:click=move |_| selected.set(Some(details.clone()))
                                                >
                                                    "View Details"
                                                </button>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </section>
                </main>
            </div>
            {move || selected.get().map(|details| view! { <ProjectDetailsModal details=details on_close=close /> })}
            <ToastStack toasts=toasts />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RefId;

    fn task(project: Option<RefId>) -> Task {
        Task {
            id: 1,
            title: "Book venue".into(),
            description: None,
            status: "To Do".into(),
            assigned_to: None,
            due_date: None,
            project,
            created_by: None,
        }
    }

    #[test]
    fn test_unknown_project_triggers_refetch() {
        let recent = vec![Project { id: 4, ..Default::default() }];
        assert!(!references_unknown_project(&task(Some(RefId::Num(4))), &recent));
        assert!(!references_unknown_project(&task(Some(RefId::Text("4".into()))), &recent));
        assert!(references_unknown_project(&task(Some(RefId::Num(9))), &recent));
        assert!(!references_unknown_project(&task(None), &recent));
    }
}
