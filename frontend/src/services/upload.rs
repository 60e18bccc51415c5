//! HTTP client for the video-processing backend.
//!
//! Two sequential calls per attempt:
//!
//! | Method | Path                                  | Returns                      |
//! |--------|---------------------------------------|------------------------------|
//! | POST   | `/process-video` (multipart `file`)   | `{ logs, summary_video }`    |
//! | GET    | `/download-video?video_path=<path>`   | raw summary video bytes      |

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData, Url};

use crate::config::{BACKEND_URL, DOWNLOAD_VIDEO_PATH, PROCESS_VIDEO_PATH, UPLOAD_FIELD};
use crate::pipeline::ProcessingBackend;
use crate::types::{AppError, AppResult, ProcessResponse, ResultVideo};

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL of the upload-and-process endpoint.
pub fn process_url(base_url: &str) -> String {
    format!("{}{}", base_url, PROCESS_VIDEO_PATH)
}

/// URL downloading the summary video stored at `summary_video`.
pub fn download_url(base_url: &str, summary_video: &str) -> String {
    format!(
        "{}{}?video_path={}",
        base_url,
        DOWNLOAD_VIDEO_PATH,
        utf8_percent_encode(summary_video, URI_COMPONENT)
    )
}

/// Backend reached with `fetch` through gloo-net.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl ProcessingBackend<File> for HttpBackend {
    async fn process_video(&self, file: &File) -> AppResult<ProcessResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

        let url = process_url(&self.base_url);
        log::info!("📤 Uploading {} to {}", file.name(), url);

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Server(format!("({}) {}", response.status(), error_text)));
        }

        response
            .json::<ProcessResponse>()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))
    }

    async fn fetch_summary(&self, summary_video: &str) -> AppResult<Option<ResultVideo>> {
        let url = download_url(&self.base_url, summary_video);
        log::info!("📥 Downloading summary video from {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            log::warn!("Download endpoint answered {}", response.status());
            return Ok(None);
        }

        let promise = web_sys::Response::from(response)
            .blob()
            .map_err(|e| AppError::Download(format!("Failed to read body: {:?}", e)))?;
        let blob: Blob = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Download(format!("Failed to read body: {:?}", e)))?
            .dyn_into()
            .map_err(|_| AppError::Download("Response body is not a Blob".to_string()))?;

        let object_url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| AppError::Download(format!("Failed to create object URL: {:?}", e)))?;

        Ok(Some(ResultVideo::from_object_url(object_url)))
    }
}
