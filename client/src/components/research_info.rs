//! Research sidebar: static context for the prediction page.

use leptos::prelude::*;

use schema::{ModelKind, PrivacyBudget};

#[component]
pub fn ResearchInfo() -> impl IntoView {
    view! {
        <aside class="research">
            <div class="card research__card">
                <h3>"Research Overview"</h3>
                <p>
                    "This platform demonstrates Federated Learning with Differential "
                    "Privacy and Secure Aggregation (FL+DP+SSA) for mental health "
                    "prediction."
                </p>
            </div>
            <div class="card research__card">
                <h3>"Model Architectures"</h3>
                <ul>
                    {ModelKind::ALL
                        .into_iter()
                        .map(|model| view! {
                            <li>
                                <strong>{model.wire_name()}": "</strong>
                                {model.display_name()}
                                " - "
                                {architecture_blurb(model)}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="card research__card">
                <h3>"Privacy Settings"</h3>
                <ul>
                    {PrivacyBudget::ALL
                        .into_iter()
                        .map(|budget| view! {
                            <li>
                                <strong>{format!("ε = {}: ", budget.epsilon())}</strong>
                                {privacy_blurb(budget)}
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <div class="card research__card">
                <h3>"Privacy Notice"</h3>
                <p>
                    "No user data is stored. All predictions are processed in "
                    "real-time and cleared immediately after use."
                </p>
            </div>
        </aside>
    }
}

/// Short architecture description for the sidebar list.
fn architecture_blurb(model: ModelKind) -> &'static str {
    match model {
        ModelKind::Lr => "Simple linear model",
        ModelKind::Mlp => "Neural network with hidden layers",
        ModelKind::DeepMlp => "Complex neural network with embeddings",
    }
}

/// Privacy trade-off description for a grid entry.
fn privacy_blurb(budget: PrivacyBudget) -> &'static str {
    match budget {
        PrivacyBudget::HighPrivacy => "High privacy, lower accuracy",
        PrivacyBudget::LowPrivacy => "Lower privacy, higher accuracy",
    }
}
