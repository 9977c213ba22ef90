//! Program Manager Dashboard
//!
//! Task list plus three independent upload slots and the shared-file list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::{ToastStack, Toasts};
use wasm_bindgen::JsCast;
use web_sys::File;

use crate::api;
use crate::components::{RoleSidebar, TaskWorkspace, TopNav, UploadedFileList};
use crate::lifecycle::Alive;
use crate::models::{Role, UploadedFile};
use crate::upload::{self, MAX_FILES, NOTHING_SELECTED, SUCCESS_MESSAGE};

fn first_file(ev: &web_sys::Event) -> Option<File> {
    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

#[component]
pub fn ManagerDashboard() -> impl IntoView {
    let alive = Alive::new();
    let toasts = Toasts::new();
    let show_form = RwSignal::new(false);
    let slots = RwSignal::new_local(vec![None::<File>; MAX_FILES]);
    let uploading = RwSignal::new(false);
    let uploaded = RwSignal::new(Vec::<UploadedFile>::new());
    let reload_files = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload_files.track();
        spawn_local(async move {
            let result = api::list_uploaded_files().await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(files) => {
                    uploaded.try_set(files);
                }
                Err(e) => {
                    log::error!("[DASHBOARD] Uploaded files unavailable: {}", e);
                    toasts.error(upload::fetch_files_error(&e));
                }
            }
        });
    });

    let on_upload = move |_| {
        let filled = slots.with_untracked(|s| upload::filled_slots(s));
        if filled.is_empty() {
            toasts.error(NOTHING_SELECTED);
            return;
        }
        uploading.set(true);
        spawn_local(async move {
            let result = api::upload_files(&filled).await;
            if !alive.get() {
                return;
            }
            uploading.try_set(false);
            if let Err(e) = &result {
                log::error!("[DASHBOARD] Upload failed: {}", e);
            }
            match upload::slot_upload_outcome(&result) {
                Ok(()) => {
                    toasts.success(SUCCESS_MESSAGE);
                    slots.try_set(vec![None; MAX_FILES]);
                    reload_files.try_update(|n| *n += 1);
                }
                Err(message) => {
                    toasts.error(message);
                }
            }
        });
    };

    view! {
        <div class="page">
            <TopNav on_create=Callback::new(move |_: ()| show_form.set(true)) />
            <div class="page-body">
                <RoleSidebar role=Role::ProgramManager />
                <main class="main-content">
                    <h2>"Manager Dashboard"</h2>
                    <TaskWorkspace toasts=toasts show_form=show_form />

                    <section class="upload-section">
                        <h3>"Upload Files"</h3>
                        {(0..MAX_FILES)
                            .map(|slot| {
                                let chosen = move || {
                                    slots.with(|s| s.get(slot).cloned().flatten().map(|f| f.name()))
                                };
                                view! {
                                    <div class="upload-slot">
                                        <label>{format!("File {}", slot + 1)}</label>
                                        <input
                                            type="file"
                                            on:change=move |ev| {
                                                let file = first_file(&ev);
                                                slots.update(|s| s[slot] = file);
                                            }
                                        />
                                        <span class="slot-name">{chosen}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <button class="upload-btn" disabled=move || uploading.get() on:click=on_upload>
                            {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                        </button>
                    </section>

                    <UploadedFileList files=uploaded />
                </main>
            </div>
            <ToastStack toasts=toasts />
        </div>
    }
}
