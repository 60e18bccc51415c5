//! Detection log list.
//!
//! Displays the backend's detection lines verbatim and keeps the
//! newest line in view.

use leptos::*;

use super::ProcessorSignal;

#[component]
pub fn DetectionLogs(state: ProcessorSignal) -> impl IntoView {
    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<html::Div>();

    create_effect(move |_| {
        // Track logs changes
        let _ = state.with(|s| s.detection_logs().len());

        if let Some(container) = logs_container.get() {
            // Scroll once the new lines are in the DOM
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="logs-panel">
            <h3 class="logs-title">"Detection Logs"</h3>
            <Show
                when=move || state.with(|s| !s.detection_logs().is_empty())
                fallback=|| view! { <p class="muted">"No detection logs available."</p> }
            >
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || state.with(|s| s.detection_logs().to_vec()).into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, line)| {
                            view! {
                                <div class="log-item">
                                    <span class="chevron">"›"</span>
                                    <span>{line}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
