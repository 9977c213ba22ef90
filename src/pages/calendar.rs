//! Project Calendar Page
//!
//! Month grid with the newest project's events.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::calendar::{events_on, today, Month};
use crate::components::{ProjectSidebar, ProjectTabs, TopNav};
use crate::lifecycle::Alive;
use crate::models::{CalendarEvent, Project};
use crate::recent::recent_projects;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Newest project and its events
async fn load_events() -> Result<Option<(Project, Vec<CalendarEvent>)>, ApiError> {
    let Some(project) = recent_projects(api::list_projects().await?).into_iter().next() else {
        return Ok(None);
    };
    let events = api::list_project_events(project.id).await?;
    Ok(Some((project, events)))
}

#[component]
pub fn Calendar() -> impl IntoView {
    let alive = Alive::new();
    let current = today();
    let month = RwSignal::new(Month::of(current));
    let events = RwSignal::new(Vec::<CalendarEvent>::new());
    let project_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = load_events().await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(Some((project, list))) => {
                    log::debug!("[CALENDAR] {} events for project #{}", list.len(), project.id);
                    project_name.try_set(Some(project.name));
                    events.try_set(list);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("[CALENDAR] {}", e);
                    error.try_set(Some(format!("Error loading events: {}", e)));
                }
            }
        });
    });

    let grid = move || {
        let weeks = month.get().weeks();
        events.with(|all| {
            weeks
                .into_iter()
                .map(|week| {
                    let cells = week
                        .iter()
                        .map(|day| {
                            let mut class = String::from("calendar-day");
                            if !day.in_month {
                                class.push_str(" outside");
                            }
                            if day.weekend {
                                class.push_str(" weekend");
                            }
                            if day.date == current {
                                class.push_str(" today");
                            }
                            let titles: Vec<String> = events_on(all, day.date).iter().map(|e| e.title.clone()).collect();
                            view! {
                                <div class=class>
                                    <span class="day-number">{day.date.format("%-d").to_string()}</span>
                                    {titles
                                        .into_iter()
                                        .map(|t| view! { <div class="calendar-event">{t}</div> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view();
                    view! { <div class="calendar-week">{cells}</div> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="page">
            <TopNav />
            <div class="page-body">
                <ProjectSidebar recent=project_name />
                <main class="main-content">
                    <ProjectTabs active="/calendar" />
                    <div class="calendar-toolbar">
                        <button on:click=move |_| month.update(|m| *m = m.shift(-1))>"‹"</button>
                        <button on:click=move |_| month.set(Month::of(current))>"Today"</button>
                        <button on:click=move |_| month.update(|m| *m = m.shift(1))>"›"</button>
                        <h2>{move || month.get().label()}</h2>
                    </div>
                    {move || error.get().map(|e| view! { <p class="error-banner">{e}</p> })}
                    <div class="calendar-grid">
                        <div class="calendar-week header">
                            {WEEKDAYS.iter().map(|d| view! { <div class="weekday">{*d}</div> }).collect_view()}
                        </div>
                        {grid}
                    </div>
                </main>
            </div>
        </div>
    }
}
