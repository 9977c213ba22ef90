//! Project Tab Strip
//!
//! Tabs linking the per-project screens.

use leptos::prelude::*;

const TABS: &[(&str, &str, &str)] = &[
    ("📄", "Summary", "/projects"),
    ("📋", "Board", "/boards"),
    ("📅", "Calendar", "/calendar"),
    ("🕒", "Timeline", "/managerdashboard"),
    ("📎", "Attachments", "/attachments"),
];

#[component]
pub fn ProjectTabs(
    /// Route of the current screen
    active: &'static str,
) -> impl IntoView {
    view! {
        <div class="tabs">
            {TABS
                .iter()
                .map(|(icon, label, href)| {
                    let class = if *href == active { "tab active-tab" } else { "tab" };
                    view! {
                        <a href=*href class=class>
                            <span class="icon">{*icon}</span>" " {*label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
