//! File Drop Box Component
//!
//! Drag-and-drop (or pick) up to three files and upload them in one
//! multipart request.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileList};

use crate::api;
use crate::lifecycle::Alive;
use crate::upload::{self, MAX_FILES, NOTHING_SELECTED, SUCCESS_MESSAGE};

/// How long the success banner stays up
const SUCCESS_VISIBLE_MS: u32 = 3_000;

fn list_files(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).take(MAX_FILES).collect()
}

#[component]
pub fn FileDropBox(
    #[prop(into)] title: String,
    /// Called after a successful upload
    #[prop(optional)]
    on_uploaded: Option<Callback<()>>,
) -> impl IntoView {
    let alive = Alive::new();
    // web_sys::File is not Send, so these live in local storage
    let files = RwSignal::new_local(Vec::<File>::new());
    let (is_over, set_is_over) = signal(false);
    let (uploading, set_uploading) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let flash = StoredValue::new_local(None::<Timeout>);

    let pick = move |picked: Vec<File>| {
        if !picked.is_empty() {
            log::debug!("[UPLOAD] {} file(s) selected", picked.len());
            files.set(picked);
            error.set(None);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        pick(list_files(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let on_change = move |ev: web_sys::Event| {
        let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        pick(list_files(input.and_then(|i| i.files())));
    };

    let on_upload = move |_| {
        let selected = files.get_untracked();
        if selected.is_empty() {
            error.set(Some(NOTHING_SELECTED.to_string()));
            return;
        }
        let slots = upload::take_slots(selected);
        set_uploading.set(true);
        error.set(None);

        spawn_local(async move {
            let outcome = api::upload_files(&slots)
                .await
                .map_err(|e| upload::error_message(&e))
                .and_then(|reply| upload::check_response(&reply));
            if !alive.get() {
                return;
            }
            set_uploading.try_set(false);
            match outcome {
                Ok(()) => {
                    log::info!("[UPLOAD] {} file(s) uploaded", slots.len());
                    files.try_set(Vec::new());
                    success.try_set(true);
                    let _ = flash.try_update_value(|t| {
                        *t = Some(Timeout::new(SUCCESS_VISIBLE_MS, move || {
                            success.try_set(false);
                        }));
                    });
                    if let Some(cb) = on_uploaded {
                        cb.run(());
                    }
                }
                Err(message) => {
                    log::error!("[UPLOAD] {}", message);
                    error.try_set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="file-drop-box">
            <h3>{title}</h3>
            <div
                class=move || if is_over.get() { "drop-area active" } else { "drop-area" }
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_: DragEvent| set_is_over.set(false)
                on:drop=on_drop
            >
                <p>"Drag & drop up to 3 files here, or"</p>
                <input type="file" multiple on:change=on_change />
            </div>

            <ul class="selected-files">
                {move || files.with(|list| {
                    list.iter().map(|f| view! { <li>{f.name()}</li> }).collect_view()
                })}
            </ul>

            <button class="upload-btn" disabled=move || uploading.get() on:click=on_upload>
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>

            {move || error.get().map(|e| view! { <p class="upload-error">{e}</p> })}
            {move || success.get().then(|| view! { <p class="upload-success">{SUCCESS_MESSAGE}</p> })}
        </div>
    }
}
