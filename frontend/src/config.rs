//! Application configuration.
//!
//! Centralized configuration for the CCTV Optimizer frontend.
//! The processing backend runs next to the browser during development,
//! so its address is a fixed literal.

/// Backend API base URL.
///
/// The video-processing service (motion + object detection).
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Path of the upload-and-process endpoint.
pub const PROCESS_VIDEO_PATH: &str = "/process-video";

/// Path of the summary video download endpoint.
pub const DOWNLOAD_VIDEO_PATH: &str = "/download-video";

/// Multipart field carrying the uploaded video.
pub const UPLOAD_FIELD: &str = "file";

/// Delay between two simulated processing stages (in milliseconds).
pub const STAGE_DELAY_MS: u32 = 1500;

/// Cosmetic stage messages shown while the upload is prepared.
///
/// They do not reflect the backend's actual progress.
pub const STAGE_MESSAGES: [&str; 5] = [
    "Initializing CCTV footage processing...",
    "Analyzing footage for motion...",
    "Detecting objects of interest...",
    "Optimizing video segments...",
    "Generating optimized output...",
];

/// Number of simulated stages.
pub const STAGE_COUNT: usize = STAGE_MESSAGES.len();

/// Step appended once the backend returned its detection logs.
pub const COMPLETE_MESSAGE: &str = "Processing complete!";

/// Step appended when either request fails.
pub const ERROR_MESSAGE: &str = "Error processing video. Please try again.";

/// Alert shown once the summary video is downloaded.
pub const READY_ALERT: &str =
    "Video processing complete! Please check the Results tab to view download options and logs.";

/// File name used when saving the optimized video.
pub const DOWNLOAD_FILE_NAME: &str = "cctv_optimized_video.mp4";

/// Media type prefix accepted by the file picker and the drop zone.
pub const VIDEO_MIME_PREFIX: &str = "video/";
