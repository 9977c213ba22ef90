//! Projectly Frontend App
//!
//! Root component: session store and client-side routing.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use reactive_stores::Store;

use crate::pages::{
    Attachments, Boards, Calendar, FileSharing, HeadGantt, HeadTask, ManagerDashboard, Projects, Register,
    RoleSelect, SignIn, SubTask,
};
use crate::store::SessionState;

#[component]
pub fn App() -> impl IntoView {
    // Session shared by every page
    provide_context(Store::new(SessionState::default()));

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignIn />
                <Route path=StaticSegment("role") view=RoleSelect />
                <Route path=StaticSegment("register") view=Register />
                <Route path=StaticSegment("projects") view=Projects />
                <Route path=StaticSegment("boards") view=Boards />
                <Route path=StaticSegment("calendar") view=Calendar />
                <Route path=StaticSegment("attachments") view=Attachments />
                <Route path=StaticSegment("dashboard2") view=ManagerDashboard />
                <Route path=StaticSegment("subTask") view=SubTask />
                <Route path=StaticSegment("fileSharing") view=FileSharing />
                <Route path=StaticSegment("managerdashboard") view=HeadGantt />
                <Route path=StaticSegment("headTask") view=HeadTask />
            </Routes>
        </Router>
    }
}
