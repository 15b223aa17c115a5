use import_flow::StatusMessage;
use leptos::*;

/// Result line of the last submission attempt. Renders nothing when idle.
#[component]
pub fn StatusLine(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <p class=format!("upload-status {}", msg.tone.css_class())>
                    {msg.text}
                </p>
            }
        })
    }
}
