//! Create Task Modal
//!
//! Modal form editing a `TaskDraft`; the owner decides what submit does.

use leptos::prelude::*;

use crate::tasks::{TaskDraft, STATUSES};

#[component]
pub fn TaskFormModal(
    draft: RwSignal<TaskDraft>,
    /// True while the create request is in flight
    #[prop(into)]
    creating: Signal<bool>,
    /// Whether the project field must be filled in
    require_project: bool,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(|d| d.validate(require_project)) {
            Ok(()) => {
                set_error.set(None);
                on_submit.run(());
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Create Task"</h2>
                <form class="task-form" on:submit=handle_submit>
                    <label>
                        {if require_project { "Project *" } else { "Project" }}
                        <input
                            type="text"
                            placeholder="Project id"
                            prop:value=move || draft.with(|d| d.project.clone())
                            on:input=move |ev| draft.update(|d| d.project = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Title *"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Status"
                        <select
                            prop:value=move || draft.with(|d| d.status.clone())
                            on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                        >
                            {STATUSES
                                .iter()
                                .map(|s| view! { <option value=*s>{*s}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Assigned to"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.assigned_to.clone())
                            on:input=move |ev| draft.update(|d| d.assigned_to = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Due date"
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.due_date.clone())
                            on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Created by"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.created_by.clone())
                            on:input=move |ev| draft.update(|d| d.created_by = event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                    <div class="modal-actions">
                        <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        <button type="submit" disabled=move || creating.get()>
                            {move || if creating.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
