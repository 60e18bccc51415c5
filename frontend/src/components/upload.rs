//! Video selection with drag & drop support.
//!
//! Handles the file picker, drops on the zone, and the start button.
//! Non-video files are ignored by the controller.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use super::ProcessorSignal;
use crate::services::files_from_list;
use crate::types::{format_megabytes, VideoSource};

#[component]
pub fn DropZone(state: ProcessorSignal) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            state.update(|s| {
                s.select_file(file);
            });
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.is_dragging()) {
            state.update(|s| s.set_dragging(true));
        }
    };

    let on_drag_leave = move |_: DragEvent| {
        state.update(|s| s.set_dragging(false));
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        state.update(|s| {
            s.drop_files(files);
        });
    };

    // Clicking anywhere on the zone opens the picker
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class="file-drop-area"
            class:dragging=move || state.with(|s| s.is_dragging())
            class:has-file=move || state.with(|s| s.selected_file().is_some())
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
            on:click=open_picker
        >
            <input
                type="file"
                accept="video/*"
                class="hidden"
                node_ref=input_ref
                on:change=on_file_change
                on:click=|ev| ev.stop_propagation()
            />
            <div class="upload-icon">"📤"</div>
            {move || match state.with(|s| s.selected_file().map(|f| (f.name(), f.size()))) {
                Some((name, size)) => view! {
                    <div>
                        <p class="file-name">{name}</p>
                        <p class="muted">{format_megabytes(size)}</p>
                    </div>
                }
                .into_view(),
                None => view! {
                    <div>
                        <p class="file-name">"Drag and drop your CCTV video file here"</p>
                        <p class="muted">"or click to browse your files"</p>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
pub fn StartButton(
    state: ProcessorSignal,
    /// Called when the user asks to optimize the selected video
    on_start: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="start-row">
            <button
                class="button button-primary button-lg"
                disabled=move || !state.with(|s| s.can_start())
                on:click=move |_| on_start.call(())
            >
                {move || if state.with(|s| s.is_processing_live()) {
                    view! { <span class="button-label"><span class="spinner"></span>"Processing..."</span> }.into_view()
                } else {
                    view! { <span class="button-label">"⚡ Optimize Video"</span> }.into_view()
                }}
            </button>
        </div>
    }
}
