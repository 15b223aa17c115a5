//! Transaction Import - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for staging transaction files and sending them to
//! the import endpoint as one batch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ImportPage            (RwSignal<ImportFlow<BrowserFile>>)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadZone  ──stage_files──▶ flow                           │
//! │  FileList    ◀── staged files                                │
//! │  StatusLine  ◀── render_status                               │
//! │  "Enviar"    ──begin / import / complete──▶ flow             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - API URL, locale, hints
//! - [`components`] - UI components
//! - [`services`] - import endpoint communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Importar | Transações"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ImportPage/>
                </Routes>
            </main>
        </Router>
    }
}
