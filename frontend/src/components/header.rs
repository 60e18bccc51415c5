use leptos::*;

const NAV_LINKS: [&str; 4] = ["Home", "Features", "Documentation", "Pricing"];

#[component]
pub fn Header() -> impl IntoView {
    let (is_scrolled, set_is_scrolled) = create_signal(false);
    let (menu_open, set_menu_open) = create_signal(false);

    // Solid background once the page leaves the top
    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_is_scrolled.set(y > 10.0);
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class:scrolled=move || is_scrolled.get()>
            <div class="header-left">
                <span class="logo-icon">"🛡️"</span>
                <span class="logo">"CCTV Optimizer"</span>
            </div>
            <div class="header-right">
                <button class="button button-primary desktop-only">"Get Started"</button>
                <button
                    class="button button-ghost mobile-only"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show
                when=move || menu_open.get()
                fallback=|| view! { }
            >
                <nav class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|label| view! { <a href="#" class="mobile-link">{*label}</a> })
                        .collect_view()}
                    <button class="button button-primary full-width">"Get Started"</button>
                </nav>
            </Show>
        </header>
    }
}
