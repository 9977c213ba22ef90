//! UI Components
//!
//! Chrome and widgets shared by the pages.

mod file_drop_box;
mod project_details;
mod project_tabs;
mod sidebar;
mod task_form;
mod task_workspace;
mod top_nav;
mod uploaded_files;

pub use file_drop_box::FileDropBox;
pub use project_details::ProjectDetailsModal;
pub use project_tabs::ProjectTabs;
pub use sidebar::{ProjectSidebar, RoleSidebar};
pub use task_form::TaskFormModal;
pub use task_workspace::TaskWorkspace;
pub use top_nav::TopNav;
pub use uploaded_files::UploadedFileList;
