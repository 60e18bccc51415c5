//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Selected video abstraction
//! - **API Types** - Backend response structures
//! - **Result Types** - Downloaded summary video handle
//! - **UI Types** - Visible panel selection
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::VIDEO_MIME_PREFIX;

// =============================================================================
// File Types
// =============================================================================

/// A user-chosen file that can be uploaded for processing.
///
/// Implemented for `web_sys::File` in [`crate::services::file`]; tests use
/// plain structs.
pub trait VideoSource: Clone {
    /// File name as reported by the browser.
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> f64;

    /// Media type, e.g. `video/mp4`. May be empty.
    fn mime_type(&self) -> String;

    /// Whether the media type denotes a video.
    fn is_video(&self) -> bool {
        is_video_mime(&self.mime_type())
    }
}

/// Check a media type against the accepted video prefix.
pub fn is_video_mime(mime: &str) -> bool {
    mime.starts_with(VIDEO_MIME_PREFIX)
}

/// Human readable file size, in megabytes with two decimals.
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / (1024.0 * 1024.0))
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend processing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// One line per detected event, displayed verbatim
    pub logs: Vec<String>,
    /// Server-side path of the summary video
    pub summary_video: String,
}

// =============================================================================
// Result Types
// =============================================================================

/// Browser-local handle on the downloaded summary video.
///
/// Wraps an object URL. In the browser the URL is revoked when the handle
/// is dropped, so the handle is intentionally not `Clone`.
#[derive(Debug, PartialEq)]
pub struct ResultVideo {
    url: String,
}

impl ResultVideo {
    /// Wrap an object URL created from a downloaded blob.
    pub fn from_object_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The object URL, usable as an anchor `href`.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResultVideo {
    fn drop(&mut self) {
        if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
            log::warn!("Failed to revoke object URL {}: {:?}", self.url, e);
        }
    }
}

// =============================================================================
// UI Types
// =============================================================================

/// Panel visible inside the processing card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// File selection and simulated progress
    #[default]
    Upload,
    /// Download button and detection logs
    Results,
}

impl ActiveTab {
    /// Label shown on the tab trigger.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Upload => "Upload Video",
            ActiveTab::Results => "Results",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Building the upload request failed.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Backend answered with a non-success status.
    Server(String),
    /// Response body could not be decoded.
    Parse(String),
    /// Summary video could not be turned into a local handle.
    Download(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server(msg) => write!(f, "Server error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Download(msg) => write!(f, "Download error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
