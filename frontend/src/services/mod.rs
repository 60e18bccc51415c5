//! Backend and browser services.
//!
//! This module provides the adapters the page needs outside Leptos:
//!
//! # Services
//!
//! - [`upload`] - Video upload and summary download (video-processing backend)
//! - [`timeline`] - Timer pacing of the simulated processing stages
//! - [`file`] - `web_sys::File` as a selectable video
//! - [`download`] - Client-side file save and alerts

pub mod upload;
pub mod timeline;
pub mod file;
pub mod download;

pub use upload::*;
pub use timeline::*;
pub use file::*;
pub use download::*;
