//! Two-panel tab switcher.

use leptos::*;

use crate::ActiveTab;

#[component]
pub fn TabList(
    /// Currently visible panel
    active: Signal<ActiveTab>,
    /// Whether the results panel can be opened
    results_enabled: Signal<bool>,
    /// Called with the requested panel
    on_select: Callback<ActiveTab>,
) -> impl IntoView {
    view! {
        <div class="tab-list" role="tablist">
            <TabTrigger
                tab=ActiveTab::Upload
                active=active
                disabled=Signal::derive(|| false)
                on_select=on_select
            />
            <TabTrigger
                tab=ActiveTab::Results
                active=active
                disabled=Signal::derive(move || !results_enabled.get())
                on_select=on_select
            />
        </div>
    }
}

#[component]
fn TabTrigger(
    tab: ActiveTab,
    active: Signal<ActiveTab>,
    disabled: Signal<bool>,
    on_select: Callback<ActiveTab>,
) -> impl IntoView {
    view! {
        <button
            class="tab-trigger"
            role="tab"
            class:active=move || active.get() == tab
            disabled=move || disabled.get()
            on:click=move |_| on_select.call(tab)
        >
            {tab.label()}
        </button>
    }
}
