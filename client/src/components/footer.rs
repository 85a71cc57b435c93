//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <h3 class="footer__brand">"FedMind"</h3>
                <p class="footer__tagline">
                    "Advancing mental health prediction through federated learning "
                    "and privacy-preserving AI"
                </p>
                <p class="footer__copyright">"© 2024 FedMind. All rights reserved."</p>
            </div>
        </footer>
    }
}
