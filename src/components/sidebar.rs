//! Sidebar Components
//!
//! Recent-project sidebar and the role menus.

use leptos::prelude::*;

use crate::models::Role;

/// Sidebar for project screens showing the newest project
#[component]
pub fn ProjectSidebar(#[prop(into)] recent: Signal<Option<String>>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="recent-projects">
                <h4><span class="icon">"⬇"</span>" Recent"</h4>
                <div class="project-item">
                    <span class="icon">"📁"</span>
                    {move || recent.get().unwrap_or_else(|| "No recent projects".to_string())}
                </div>
            </div>
            <a href="/projects" class="view-link">"View All Projects"</a>
        </aside>
    }
}

/// Menu entries (icon, label, route) for a role
fn role_menu(role: Role) -> &'static [(&'static str, &'static str, &'static str)] {
    match role {
        Role::ProgramManager => &[
            ("📊", "Generate Reports", "/dashboard2"),
            ("📋", "Create Sub Tasks", "/subTask"),
            ("📁", "File Sharing", "/fileSharing"),
        ],
        Role::Head => &[
            ("📊", "Reports", "/managerdashboard"),
            ("📋", "Tasks", "/headTask"),
            ("📅", "Calendar", "/calendar"),
        ],
        Role::CommitteeMember => &[
            ("📁", "Projects", "/projects"),
            ("📋", "Board", "/boards"),
            ("📎", "Attachments", "/attachments"),
        ],
    }
}

/// Sidebar with the navigation menu of one role
#[component]
pub fn RoleSidebar(role: Role) -> impl IntoView {
    view! {
        <aside class="sidebar2">
            <div class="recent-projects">
                <h4><span class="icon">"⬇"</span>" " {role.label()}</h4>
                {role_menu(role)
                    .iter()
                    .map(|(icon, label, href)| {
                        view! {
                            <a href=*href class="project-item">
                                <span class="icon">{*icon}</span>" " {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <a href="/projects" class="view-link">"View All Projects"</a>
        </aside>
    }
}
