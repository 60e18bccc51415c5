use leptos::*;

use super::ProcessorSignal;
use crate::STAGE_COUNT;

#[component]
pub fn ProcessingPanel(state: ProcessorSignal) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-header">
                <h3>"Processing CCTV Footage"</h3>
                <span class="muted">
                    {move || format!("Stage {} of {}", state.with(|s| s.processing_stage()), STAGE_COUNT)}
                </span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || {
                        let stage = state.with(|s| s.processing_stage());
                        format!("{}%", stage * 100 / STAGE_COUNT)
                    }
                ></div>
            </div>
            <div class="steps">
                <For
                    each=move || state.with(|s| s.process_steps().to_vec()).into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, step)| {
                        view! {
                            <div class="log-item">
                                <span class="chevron">"›"</span>
                                <span>{step}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
