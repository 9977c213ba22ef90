//! Head of Committee Gantt Dashboard
//!
//! Per-project Gantt timeline with an add-task form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::{ToastStack, Toasts};

use crate::api::{self, ApiError};
use crate::components::{RoleSidebar, TopNav};
use crate::gantt::{rows, GanttDraft, GanttRow, Timeline};
use crate::lifecycle::Alive;
use crate::models::{GanttTask, Project, Role};
use crate::recent;

/// Chart id first, then POST the task against it
async fn add_gantt_task(project_id: u32, draft: GanttDraft) -> Result<GanttTask, ApiError> {
    let chart = api::get_gantt_chart(project_id).await?;
    let request = draft.to_request(chart.id).map_err(ApiError::Encode)?;
    api::create_gantt_task(project_id, &request).await
}

/// A chart reply only applies while its project is still the selected one
fn still_selected(selected: Option<u32>, requested: u32) -> bool {
    selected == Some(requested)
}

#[component]
pub fn HeadGantt() -> impl IntoView {
    let alive = Alive::new();
    let toasts = Toasts::new();
    let projects = RwSignal::new(Vec::<Project>::new());
    let selected = RwSignal::new(None::<u32>);
    let tasks = RwSignal::new(Vec::<GanttTask>::new());
    let draft = RwSignal::new(GanttDraft::default());
    let saving = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::list_projects().await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(list) => {
                    selected.try_set(list.first().map(|p| p.id));
                    projects.try_set(list);
                }
                Err(e) => {
                    log::error!("[GANTT] Projects unavailable: {}", e);
                    toasts.error(recent::fetch_error(&e));
                }
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        let Some(project_id) = selected.get() else {
            return;
        };
        spawn_local(async move {
            let result = match api::get_gantt_chart(project_id).await {
                Ok(chart) => {
                    log::debug!("[GANTT] Chart #{} for project #{}", chart.id, project_id);
                    api::list_gantt_tasks(project_id).await
                }
                Err(e) => Err(e),
            };
            if !alive.get() || !still_selected(selected.get_untracked(), project_id) {
                log::debug!("[GANTT] Dropping stale chart for project #{}", project_id);
                return;
            }
            match result {
                Ok(list) => {
                    tasks.try_set(list);
                }
                Err(e) => {
                    log::error!("[GANTT] {}", e);
                    tasks.try_set(Vec::new());
                    toasts.error("Error fetching Gantt chart data");
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(project_id) = selected.get_untracked() else {
            toasts.error("Please select a project first");
            return;
        };
        let current = draft.get_untracked();
        if let Err(message) = current.validate() {
            toasts.error(message);
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let result = add_gantt_task(project_id, current).await;
            if !alive.get() {
                return;
            }
            saving.try_set(false);
            match result {
                Ok(task) => {
                    log::info!("[GANTT] Added task #{}", task.id);
                    toasts.success("Task added successfully");
                    draft.try_set(GanttDraft::default());
                    reload.try_update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("[GANTT] Add failed: {}", e);
                    toasts.error("Error adding task");
                }
            }
        });
    };

    let chart = move || {
        let chart_rows = tasks.with(|t| rows(t));
        let Some(timeline) = Timeline::for_rows(&chart_rows) else {
            return view! { <p class="empty">"No tasks in this chart yet"</p> }.into_any();
        };
        view! {
            <div class="gantt-chart">
                {chart_rows.into_iter().map(|row| gantt_row(&timeline, row)).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <TopNav />
            <div class="page-body">
                <RoleSidebar role=Role::Head />
                <main class="main-content">
                    <h2>"Project Timeline"</h2>
                    <label class="project-select">
                        "Project "
                        <select
                            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| selected.set(event_target_value(&ev).parse().ok())
                        >
                            {move || projects
                                .get()
                                .into_iter()
                                .map(|p| view! { <option value=p.id.to_string()>{p.name}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    {chart}

                    <form class="gantt-form" on:submit=on_submit>
                        <h3>"Add Task"</h3>
                        <input
                            type="text"
                            placeholder="Task name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.start_date.clone())
                            on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.end_date.clone())
                            on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="0"
                            max="100"
                            placeholder="Progress %"
                            prop:value=move || draft.with(|d| d.progress.clone())
                            on:input=move |ev| draft.update(|d| d.progress = event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Adding..." } else { "Add Task" }}
                        </button>
                    </form>
                </main>
            </div>
            <ToastStack toasts=toasts />
        </div>
    }
}

fn gantt_row(timeline: &Timeline, row: GanttRow) -> impl IntoView {
    let style = format!("left: {:.2}%; width: {:.2}%;", timeline.offset_pct(&row), timeline.width_pct(&row));
    let fill = format!("width: {:.0}%;", row.progress * 100.0);
    let label = row.progress_label();
    let after = (!row.dependencies.is_empty()).then(|| format!("after {}", row.dependencies));
    view! {
        <div class="gantt-row">
            <div class="gantt-label">
                <span class="gantt-name">{row.text}</span>
                <span class="gantt-dates">
                    {format!("{} · {}d", row.start_date.format("%b %-d"), row.duration)}
                </span>
                {after.map(|a| view! { <span class="gantt-deps">{a}</span> })}
            </div>
            <div class="gantt-track">
                <div class="gantt-bar" style=style>
                    <div class="gantt-progress" style=fill></div>
                    <span class="gantt-percent">{label}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_for_previous_project_is_stale() {
        assert!(still_selected(Some(3), 3));
        assert!(!still_selected(Some(4), 3));
        assert!(!still_selected(None, 3));
    }
}
