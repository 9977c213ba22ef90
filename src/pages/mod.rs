//! Pages
//!
//! One component per route.

mod attachments;
mod boards;
mod calendar;
mod file_sharing;
mod head_gantt;
mod head_task;
mod manager_dashboard;
mod projects;
mod register;
mod role;
mod sign_in;
mod sub_task;

pub use attachments::Attachments;
pub use boards::Boards;
pub use calendar::Calendar;
pub use file_sharing::FileSharing;
pub use head_gantt::HeadGantt;
pub use head_task::HeadTask;
pub use manager_dashboard::ManagerDashboard;
pub use projects::Projects;
pub use register::Register;
pub use role::RoleSelect;
pub use sign_in::SignIn;
pub use sub_task::SubTask;
