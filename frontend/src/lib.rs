//! Art Style Classifier - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading a painting to the prediction service
//! and opening the result page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage                                                    │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection                                          │
//! │      ├── file input  ──▶ UploadController (artstyle crate)  │
//! │      └── PreviewImage ◀── SignalPreview                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Element ids and backend location
//! - [`components`] - UI components (Hero, Upload, Preview)
//! - [`services`] - Browser adapters (fetch upload, alert, location)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🎨 Art Style Classifier - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Art Style Classifier"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadSection/>
        </div>
    }
}
