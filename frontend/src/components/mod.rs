//! UI Components for the CCTV Optimizer application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with mobile menu
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`VideoProcessor`] - Card owning the upload-and-process controller
//! - [`TabList`] - Upload / Results switcher
//! - [`DropZone`] - Video selection with drag & drop
//! - [`StartButton`] - Starts an attempt
//! - [`ProcessingPanel`] - Simulated stage progress
//! - [`ResultsPanel`] - Summary download and detection logs
//! - [`DetectionLogs`] - Backend detection lines

mod header;
mod hero;
mod tabs;
mod upload;
mod progress;
mod logs;
mod results;
mod processor;

pub use header::*;
pub use hero::*;
pub use tabs::*;
pub use upload::*;
pub use progress::*;
pub use logs::*;
pub use results::*;
pub use processor::*;
