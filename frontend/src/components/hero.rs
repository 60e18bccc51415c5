//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"CCTV Footage Optimizer"</h1>
            <p class="subtitle">
                "Enhance your surveillance footage with advanced AI-driven activity "
                "detection and optimization."
            </p>
        </div>
    }
}
