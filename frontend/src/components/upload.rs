//! File picker with drag & drop support.
//!
//! Hands every selection to the parent as one batch of handles; staging
//! rules live in the import flow, not here.

use import_flow::ACCEPTED_EXTENSIONS;
use leptos::*;
use web_sys::HtmlInputElement;

use crate::services::{files_from_list, BrowserFile};

#[component]
pub fn UploadZone(
    /// Called with the full selection, in picker order
    #[prop(into)]
    on_upload: Callback<Vec<BrowserFile>>,
    /// Ignore new selections (e.g. while a batch is being sent)
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (is_drag_active, set_drag_active) = create_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            on_upload.call(files_from_list(&list));
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |_: ev::DragEvent| set_drag_active.set(false);

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if disabled.get_untracked() {
            return;
        }
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_upload.call(files_from_list(&list));
        }
    };

    let trigger_file_input = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-zone"
            class:drag-active=move || is_drag_active.get()
            class:disabled=move || disabled.get()
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">
                {move || upload_prompt(is_drag_active.get(), disabled.get())}
            </div>

            <input
                type="file"
                multiple=true
                accept=ACCEPTED_EXTENSIONS
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
            />
        </div>
    }
}

fn upload_prompt(is_drag_active: bool, disabled: bool) -> &'static str {
    match (disabled, is_drag_active) {
        (true, _) => "⏳ Enviando arquivos...",
        (false, true) => "Solte os arquivos aqui",
        (false, false) => "Selecione ou arraste os arquivos aqui",
    }
}
