//! Uploaded File List

use leptos::prelude::*;

use crate::models::UploadedFile;

#[component]
pub fn UploadedFileList(#[prop(into)] files: Signal<Vec<UploadedFile>>) -> impl IntoView {
    view! {
        <div class="uploaded-files">
            <h4>"Uploaded Files"</h4>
            <Show
                when=move || files.with(|f| !f.is_empty())
                fallback=|| view! { <p class="empty">"No files uploaded yet"</p> }
            >
                <ul>
                    {move || files.get().into_iter().map(|file| {
                        let name = file.display_name().to_string();
                        let size = file.size_label();
                        view! {
                            <li class="uploaded-file">
                                <a href=file.file target="_blank" rel="noopener noreferrer">{name}</a>
                                <span class="file-size">{size}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
