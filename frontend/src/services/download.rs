//! Client-side save of the downloaded video and user notifications.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::types::{AppError, AppResult};

/// Save the resource at `url` under `file_name`.
///
/// A transient `<a download>` is attached to the body, clicked and removed.
/// No request reaches the backend.
pub fn save_object_url(url: &str, file_name: &str) -> AppResult<()> {
    let document = gloo_utils::document();
    let body = gloo_utils::body();

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::Download(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into()
        .map_err(|_| AppError::Download("Created element is not an anchor".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor)
        .map_err(|e| AppError::Download(format!("Failed to attach anchor: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| AppError::Download(format!("Failed to detach anchor: {:?}", e)))?;

    log::info!("💾 Saved {}", file_name);
    Ok(())
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::warn!("Failed to show alert: {:?}", e);
    }
}
