//! CCTV Optimizer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads CCTV footage to the video-processing
//! backend, then offers the optimized summary video and its detection logs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, mobile menu)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── VideoProcessor                                          │
//! │      ├── TabList (Upload | Results)                          │
//! │      ├── DropZone + StartButton + ProcessingPanel            │
//! │      └── ResultsPanel (download, DetectionLogs)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ProcessResponse, ResultVideo, AppError, etc.)
//! - [`state`] - Upload-and-process controller
//! - [`pipeline`] - One attempt: simulated stages, upload, download
//! - [`components`] - UI components (Header, VideoProcessor, etc.)
//! - [`services`] - Backend communication and browser helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod pipeline;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    VideoSource,
    // API
    ProcessResponse,
    // Results
    ResultVideo,
    // UI
    ActiveTab,
    // Errors
    AppError, AppResult,
};

// Controller
pub use state::{Phase, Processor, ProgressEvent};
pub use pipeline::{run_attempt, Outcome};

// Components
pub use components::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CCTV Footage Optimizer"/>
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
    view! {
        <Header/>

        <section class="page">
            <div class="container">
                <Hero/>
                <VideoProcessor/>
            </div>
        </section>
    }
}
