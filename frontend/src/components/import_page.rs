//! The import page: picker, staged list, status line and send button.
//!
//! All state lives in one `ImportFlow` signal. Submitting is split around
//! the request so the signal is never borrowed across an await.

use import_flow::{ImportFlow, ImportService};
use leptos::*;

use super::{FileList, StatusLine, UploadZone};
use crate::services::{BrowserFile, BrowserImportService};
use crate::{API_URL, FORMAT_HINT, LOCALE};

#[component]
pub fn ImportPage() -> impl IntoView {
    let flow = create_rw_signal(ImportFlow::<BrowserFile>::new(LOCALE));
    let service = BrowserImportService::new(API_URL);

    let is_submitting = Signal::derive(move || flow.with(|f| f.is_submitting()));
    let staged = Signal::derive(move || flow.with(|f| f.staged().to_vec()));
    let message = Signal::derive(move || flow.with(|f| f.render_status()));

    let on_upload = move |files: Vec<BrowserFile>| {
        flow.update(|f| f.stage_files(files));
    };

    let on_submit = move |_| {
        let Some(Ok(batch)) = flow.try_update(|f| f.begin_submission()) else {
            return;
        };

        let service = service.clone();
        spawn_local(async move {
            let outcome = service.import(&batch.files).await;
            flow.update(|f| {
                f.complete_submission(batch.ticket, outcome);
            });
        });
    };

    view! {
        <div class="container">
            <h1 class="title">"Importar uma transação"</h1>
            <div class="import-file-container">
                <UploadZone on_upload=on_upload disabled=is_submitting/>

                <Show
                    when=move || !staged.get().is_empty()
                    fallback=|| view! { }
                >
                    <FileList files=staged/>
                </Show>

                <StatusLine message=message/>

                <footer class="import-footer">
                    <p>
                        <span class="alert-icon">"⚠️"</span>
                        {FORMAT_HINT}
                    </p>
                    <button
                        type="button"
                        on:click=on_submit
                        disabled=move || is_submitting.get()
                    >
                        "Enviar"
                    </button>
                </footer>
            </div>
        </div>
    }
}
