//! Task Workspace Component
//!
//! Task list (optionally with subtasks) plus the create-task modal.
//! Failures surface through the screen's toast queue.

use std::collections::HashMap;

use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::Toasts;

use crate::api::{self, ApiError};
use crate::calendar::today;
use crate::components::TaskFormModal;
use crate::lifecycle::Alive;
use crate::models::{Subtask, Task};
use crate::tasks::TaskDraft;

fn fetch_error(err: &ApiError) -> &'static str {
    if err.is_network() {
        "Error fetching tasks"
    } else {
        "Failed to fetch tasks"
    }
}

fn create_error(err: &ApiError) -> String {
    if err.is_network() {
        "Error creating task".to_string()
    } else {
        format!("Failed to create task: {}", err.payload_message().unwrap_or("Unknown error"))
    }
}

#[component]
pub fn TaskWorkspace(
    toasts: Toasts,
    /// Modal visibility, shared with the navbar's Create button
    show_form: RwSignal<bool>,
    /// Also fetch and list each task's subtasks
    #[prop(optional)]
    with_subtasks: bool,
    #[prop(optional)]
    require_project: bool,
    /// Called with each task the backend accepted
    #[prop(optional)]
    on_created: Option<Callback<Task>>,
) -> impl IntoView {
    let alive = Alive::new();
    let tasks = RwSignal::new(Vec::<Task>::new());
    let subtasks = RwSignal::new(HashMap::<u32, Vec<Subtask>>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(list) => {
                    if !alive.get() {
                        return;
                    }
                    log::debug!("[TASKS] Loaded {} tasks", list.len());
                    let ids: Vec<u32> = list.iter().map(|t| t.id).collect();
                    tasks.try_set(list);

                    if with_subtasks {
                        let fetched = join_all(ids.into_iter().map(|id| async move {
                            let subs = api::list_subtasks(id).await.unwrap_or_else(|e| {
                                log::warn!("[TASKS] Subtasks of #{} unavailable: {}", id, e);
                                Vec::new()
                            });
                            (id, subs)
                        }))
                        .await;
                        if alive.get() {
                            subtasks.try_set(fetched.into_iter().collect());
                        }
                    }
                }
                Err(e) => {
                    log::error!("[TASKS] Fetch failed: {}", e);
                    if alive.get() {
                        toasts.error(fetch_error(&e));
                    }
                }
            }
            loading.try_set(false);
        });
    });

    let draft = RwSignal::new(TaskDraft::new(today()));
    let creating = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        let request = draft.with_untracked(|d| d.to_request());
        creating.set(true);
        spawn_local(async move {
            let result = api::create_task(&request).await;
            if !alive.get() {
                return;
            }
            creating.try_set(false);
            match result {
                Ok(task) => {
                    toasts.success(format!("Task \"{}\" created successfully!", request.title));
                    show_form.try_set(false);
                    reload.try_update(|n| *n += 1);
                    if let Some(cb) = on_created {
                        cb.run(task);
                    }
                }
                Err(e) => {
                    log::error!("[TASKS] Create failed: {}", e);
                    toasts.error(create_error(&e));
                }
            }
            draft.try_set(TaskDraft::new(today()));
        });
    });

    let cancel = Callback::new(move |_: ()| {
        show_form.set(false);
        draft.set(TaskDraft::new(today()));
    });

    view! {
        <section class="task-section">
            <div class="section-header">
                <h3>"Tasks"</h3>
                <button class="create-task-btn" on:click=move |_| show_form.set(true)>"+ Create Task"</button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading tasks..."</p> }
            >
                <Show
                    when=move || tasks.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="empty">"No tasks yet"</p> }
                >
                    <ul class="task-list">
                        <For
                            each=move || tasks.get()
                            key=|t| t.id
                            children=move |task| {
                                let id = task.id;
                                let due = task.due_date.clone().unwrap_or_else(|| "No due date".to_string());
                                view! {
                                    <li class="task-item">
                                        <div class="task-title">{task.title.clone()}</div>
                                        <div class="task-meta">
                                            <span class="task-status">{task.status.clone()}</span>
                                            <span class="task-due">{due}</span>
                                        </div>
                                        {with_subtasks.then(move || view! {
                                            <ul class="subtask-list">
                                                {move || subtasks.with(|all| {
                                                    all.get(&id)
                                                        .map(|subs| subs.iter().map(|s| {
                                                            let class = if s.completed { "subtask done" } else { "subtask" };
                                                            view! { <li class=class>{s.title.clone()}</li> }
                                                        }).collect_view())
                                                })}
                                            </ul>
                                        })}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>

            <Show when=move || show_form.get()>
                <TaskFormModal
                    draft=draft
                    creating=creating
                    require_project=require_project
                    on_submit=submit
                    on_cancel=cancel
                />
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_wording() {
        let offline = ApiError::Network("Failed to fetch".into());
        assert_eq!(fetch_error(&offline), "Error fetching tasks");
        assert_eq!(create_error(&offline), "Error creating task");

        let rejected = ApiError::Http { status: 400, message: "Request failed".into(), payload: Some(json!({"message": "Title taken"})) };
        assert_eq!(fetch_error(&rejected), "Failed to fetch tasks");
        assert_eq!(create_error(&rejected), "Failed to create task: Title taken");

        let bare = ApiError::Http { status: 400, message: "Request failed".into(), payload: None };
        assert_eq!(create_error(&bare), "Failed to create task: Unknown error");
    }
}
