//! The video processing card.
//!
//! Owns the page controller and runs attempts against the backend.

use leptos::*;
use web_sys::File;

use super::{DropZone, ProcessingPanel, ResultsPanel, StartButton, TabList};
use crate::pipeline::{run_attempt, Outcome};
use crate::services::{alert, HttpBackend, TimerTimeline};
use crate::state::{Phase, Processor};
use crate::{ActiveTab, READY_ALERT};

/// Controller state shared by the card's components.
pub type ProcessorSignal = RwSignal<Processor<File>>;

#[component]
pub fn VideoProcessor() -> impl IntoView {
    let state: ProcessorSignal = create_rw_signal(Processor::new());

    let on_start = Callback::new(move |()| {
        let mut started = None;
        state.update(|s| started = s.begin());
        let Some(attempt) = started else {
            return;
        };

        spawn_local(async move {
            let id = attempt.id;
            let backend = HttpBackend::default();
            let timeline = TimerTimeline::default();

            let outcome = run_attempt(attempt, &backend, &timeline, move |event| {
                state.update(|s| {
                    s.apply(id, event);
                });
            })
            .await;

            if outcome == Outcome::Ready && state.with_untracked(|s| s.is_live(id)) {
                alert(READY_ALERT);
            }
        });
    });

    let on_select = Callback::new(move |tab: ActiveTab| {
        state.update(|s| {
            s.select_tab(tab);
        });
    });

    let active = Signal::derive(move || state.with(|s| s.active_tab()));
    let results_enabled = Signal::derive(move || state.with(|s| s.results_available()));

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"🎞️ Video Processing"</h2>
                <p class="card-description">
                    "Upload your CCTV footage to optimize recording segments"
                </p>
            </div>
            <div class="card-content">
                <TabList active=active results_enabled=results_enabled on_select=on_select/>

                <Show
                    when=move || active.get() == ActiveTab::Upload
                    fallback=move || view! { <ResultsPanel state=state/> }
                >
                    <DropZone state=state/>
                    <StartButton state=state on_start=on_start/>
                    <Show
                        when=move || state.with(|s| s.is_processing_live() || s.phase() == Phase::Error)
                        fallback=|| view! { }
                    >
                        <ProcessingPanel state=state/>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
