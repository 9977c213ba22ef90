//! Projects Page
//!
//! The three newest projects with a read-only details view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ProjectDetailsModal, ProjectSidebar, ProjectTabs, TopNav};
use crate::lifecycle::Alive;
use crate::models::Project;
use crate::recent::{self, card_status, recent_projects, ProjectDetails};

#[component]
pub fn Projects() -> impl IntoView {
    let alive = Alive::new();
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<ProjectDetails>);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::list_projects().await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(list) => {
                    log::debug!("[PROJECTS] Loaded {} projects", list.len());
                    projects.try_set(recent_projects(list));
                }
                Err(e) => {
                    log::error!("[PROJECTS] {}", e);
                    error.try_set(Some(recent::fetch_error(&e).to_string()));
                }
            }
            loading.try_set(false);
        });
    });

    let newest = Signal::derive(move || projects.with(|p| p.first().map(|p| p.name.clone())));
    let close = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="page">
            <TopNav />
            <div class="page-body">
                <ProjectSidebar recent=newest />
                <main class="main-content">
                    <ProjectTabs active="/projects" />
                    <h2>"Recent Projects"</h2>
                    {move || error.get().map(|e| view! { <p class="error-banner">{e}</p> })}
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <p class="loading">"Loading projects..."</p> }
                    >
                        <div class="project-cards">
                            <For
                                each=move || projects.get()
                                key=|p| p.id
                                children=move |project| {
                                    let details = ProjectDetails::from_project(&project, "Active");
                                    let status = card_status(&project);
                                    let description = details.description.clone();
                                    view! {
                                        <div class="project-card">
                                            <h3>{project.name.clone()}</h3>
                                            <p class="description">{description}</p>
                                            <span class="status-badge">{status}</span>
                                            <button
                                                class="view-btn"
                                                on:click=move |_| selected.set(Some(details.clone()))
                                            >
                                                "View"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </main>
            </div>
            {move || selected.get().map(|details| view! { <ProjectDetailsModal details=details on_close=close /> })}
        </div>
    }
}
