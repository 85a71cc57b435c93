//! Landing page: hero, key-features grid, and entry links.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="home__hero">
                <h1 class="home__headline">
                    "AI-Powered Mental Health"
                    <span class="home__headline-accent">"Prediction Platform"</span>
                </h1>
                <p class="home__lede">
                    "This demo predicts whether a user may require mental health "
                    "treatment using AI models trained with Federated Learning, "
                    "Differential Privacy, and Secure Aggregation. No data is "
                    "stored, and predictions are generated in real-time."
                </p>
                <div class="home__actions">
                    <a class="btn btn--primary" href="/prediction">"Start Prediction"</a>
                    <a class="btn" href="/documentation">"Learn More"</a>
                </div>
                <div class="card home__disclaimer">
                    <h3>"Privacy First"</h3>
                    <p>
                        "Your data is never stored or sent to third parties. All "
                        "predictions are generated in real-time using "
                        "privacy-preserving techniques."
                    </p>
                </div>
            </section>

            <section class="home__features">
                <h2>"Key Features"</h2>
                <p class="home__features-lede">"Built with cutting-edge privacy technologies"</p>
                <div class="home__feature-grid">
                    <FeatureHighlight
                        title="Federated Learning"
                        body="Models trained across decentralized data without centralizing sensitive information"
                    />
                    <FeatureHighlight
                        title="Differential Privacy"
                        body="Mathematical guarantees that individual data points cannot be identified"
                    />
                    <FeatureHighlight
                        title="Secure Aggregation"
                        body="Encrypted model updates ensure no single party can access raw training data"
                    />
                </div>
            </section>
        </div>
    }
}

/// One card in the key-features grid.
#[component]
fn FeatureHighlight(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="home__feature">
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}
