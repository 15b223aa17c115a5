use import_flow::StagedFile;
use leptos::*;

use crate::services::BrowserFile;

/// Staged files with their readable sizes.
#[component]
pub fn FileList(#[prop(into)] files: Signal<Vec<StagedFile<BrowserFile>>>) -> impl IntoView {
    view! {
        <ul class="file-list">
            <For
                each=move || files.get().into_iter().enumerate()
                key=|(idx, file)| (*idx, file.name().to_string())
                children=move |(_, file)| {
                    view! {
                        <li class="file-item">
                            <strong class="file-name">{file.name().to_string()}</strong>
                            <span class="file-size">{file.readable_size().to_string()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
