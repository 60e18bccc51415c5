//! Results panel: summary video download and detection logs.

use leptos::*;

use super::{DetectionLogs, ProcessorSignal};
use crate::services::save_object_url;

#[component]
pub fn ResultsPanel(state: ProcessorSignal) -> impl IntoView {
    let on_download = move |_| {
        let target = state.with_untracked(|s| {
            s.download_target()
                .map(|(url, file_name)| (url.to_string(), file_name))
        });
        if let Some((url, file_name)) = target {
            if let Err(e) = save_object_url(&url, file_name) {
                log::error!("❌ {}", e);
            }
        }
    };

    view! {
        <Show
            when=move || state.with(|s| s.is_video_ready())
            fallback=|| view! {
                <div class="results-hint">
                    <p class="lead">"Optimized video processing complete."</p>
                    <p class="muted">
                        "Please switch to the Results tab to download and view detection logs."
                    </p>
                </div>
            }
        >
            <div class="results">
                <div class="results-ready">
                    <p class="lead">"Your optimized video is ready!"</p>
                    <button class="button button-primary" on:click=on_download>
                        "⬇️ Download Video"
                    </button>
                </div>
                <DetectionLogs state=state/>
            </div>
        </Show>
    }
}
