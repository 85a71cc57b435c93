//! Top navigation with a small-screen menu toggle.

use leptos::prelude::*;

/// Route links shared by the desktop bar and the mobile menu.
const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/prediction", "Prediction"),
    ("/documentation", "Documentation"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">"FedMind"</a>
                <div class="navbar__links">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a class="navbar__link" href=*href>{*label}</a>
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="navbar__menu-button"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <a
                                class="navbar__mobile-link"
                                href=*href
                                on:click=move |_| menu_open.set(false)
                            >
                                {*label}
                            </a>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}
