//! Kanban Board Page
//!
//! Fixed To Do / Doing / Done columns backed by the public board lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::board::{arrange_columns, BoardColumn};
use crate::components::{ProjectSidebar, ProjectTabs, TopNav};
use crate::config::BOARD_ID;
use crate::lifecycle::Alive;

fn add_failed(err: &ApiError) -> String {
    if err.is_network() {
        format!("Error adding card: {}", err)
    } else {
        format!("Failed to add card: {}", err)
    }
}

#[component]
pub fn Boards() -> impl IntoView {
    let alive = Alive::new();
    let columns = RwSignal::new(arrange_columns(&[]));
    let status = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            let result = api::list_board_lists(BOARD_ID).await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(lists) => {
                    columns.try_set(arrange_columns(&lists));
                }
                Err(e) => {
                    log::error!("[BOARD] Lists unavailable: {}", e);
                    status.try_set(Some(format!("Error loading board: {}", e)));
                }
            }
        });
    });

    let add_card = Callback::new(move |(list_id, title): (u32, String)| {
        status.set(Some("Adding card...".to_string()));
        spawn_local(async move {
            let result = api::create_card(list_id, &title).await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(_) => {
                    status.try_set(Some("Card added successfully!".to_string()));
                    reload.try_update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("[BOARD] Add card failed: {}", e);
                    status.try_set(Some(add_failed(&e)));
                }
            }
        });
    });

    view! {
        <div class="page">
            <TopNav />
            <div class="page-body">
                <ProjectSidebar recent=Signal::derive(|| None::<String>) />
                <main class="main-content">
                    <ProjectTabs active="/boards" />
                    <h2>"Board"</h2>
                    {move || status.get().map(|s| view! { <p class="board-status">{s}</p> })}
                    <div class="board-columns">
                        {move || columns
                            .get()
                            .into_iter()
                            .map(|column| view! { <BoardColumnView column=column on_add=add_card /> })
                            .collect_view()}
                    </div>
                </main>
            </div>
        </div>
    }
}

#[component]
fn BoardColumnView(column: BoardColumn, on_add: Callback<(u32, String)>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let list_id = column.list_id;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        let text = text.trim();
        let Some(list_id) = list_id else {
            return;
        };
        if text.is_empty() {
            return;
        }
        on_add.run((list_id, text.to_string()));
        set_title.set(String::new());
    };

    view! {
        <div class=format!("board-column column-{}", column.key)>
            <h3>{column.title}</h3>
            <div class="cards">
                {column
                    .cards
                    .into_iter()
                    .map(|card| view! { <div class="card">{card.title}</div> })
                    .collect_view()}
            </div>
            <form class="add-card-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Add a card"
                    disabled=list_id.is_none()
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=list_id.is_none()>"Add"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_failed_wording() {
        let offline = ApiError::Network("Failed to fetch".into());
        assert_eq!(add_failed(&offline), "Error adding card: Failed to fetch");

        let refused = ApiError::Http { status: 400, message: "list is required".into(), payload: None };
        assert_eq!(add_failed(&refused), "Failed to add card: list is required");
    }
}
