//! Project Details Modal

use leptos::prelude::*;

use crate::recent::ProjectDetails;

/// Read-only view of one project
#[component]
pub fn ProjectDetailsModal(details: ProjectDetails, on_close: Callback<()>) -> impl IntoView {
    let team = if details.team.is_empty() {
        view! { <p class="muted">"No team members assigned"</p> }.into_any()
    } else {
        view! {
            <ul class="team-list">
                {details.team.iter().map(|m| view! { <li>{m.clone()}</li> }).collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal project-details" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{details.name.clone()}</h2>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <p class="description">{details.description.clone()}</p>
                <dl class="details-grid">
                    <dt>"Manager"</dt><dd>{details.manager.clone()}</dd>
                    <dt>"Start date"</dt><dd>{details.start_date.clone()}</dd>
                    <dt>"Deadline"</dt><dd>{details.deadline.clone()}</dd>
                    <dt>"Status"</dt><dd>{details.status.clone()}</dd>
                    <dt>"Created"</dt><dd>{details.created_at.clone()}</dd>
                    <dt>"Created by"</dt><dd>{details.created_by.clone()}</dd>
                </dl>
                <h4>"Team"</h4>
                {team}
            </div>
        </div>
    }
}
