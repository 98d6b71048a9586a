//! Recap - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a recording (MP4 or MP3), showing
//! the analysis the backend renders for it, and revisiting or deleting
//! earlier analyses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├──────────────────────────────────────┬──────────────────────┤
//! │  Main panel                          │  RecentEntries        │
//! │  ├── DropSurface (DropReady)         │  (open / delete)      │
//! │  └── ResultPanel (Uploading,         │                       │
//! │                   ShowingResult)     │                       │
//! ├──────────────────────────────────────┴──────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire types, result content, errors
//! - [`state`] - View state machine and recent list
//! - [`ingest`] - Media type gate for dropped/picked files
//! - [`controller`] - Orchestration of uploads, refreshes, opens, deletes
//! - [`components`] - UI components
//! - [`services`] - Backend HTTP client and browser dialogs

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod ingest;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    RecentEntry, UploadResponse, DeleteResponse,
    // Result area
    ResultContent,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{ViewState, Surface, RecentList, ListItem};

// Controller
pub use controller::Controller;

// Components
pub use components::*;

// Services
pub use services::*;

/// Controller wired to the real backend and browser dialogs.
pub type AppController = Controller<HttpApi, BrowserDialogs>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Recap - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Recap - Speaking Analysis"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let ctrl = AppController::new(HttpApi::new(BACKEND_URL), BrowserDialogs);
    ctrl.start();

    let view_state = ctrl.view();
    let surface = create_memo(move |_| view_state.with(ViewState::surface));

    let drop_ctrl = ctrl.clone();
    let list_ctrl = ctrl.clone();

    view! {
        <div class="container">
            <Hero/>

            <div class="layout">
                <section class="main-panel">
                    // Drop surface only in DropReady
                    <Show
                        when=move || surface.with(|s| s.drop_visible)
                        fallback=|| view! { }
                    >
                        <DropSurface ctrl=drop_ctrl.clone()/>
                    </Show>

                    <ResultPanel surface=surface ctrl=ctrl.clone()/>
                </section>

                <RecentEntries ctrl=list_ctrl/>
            </div>
        </div>

        <Footer/>
    }
}
