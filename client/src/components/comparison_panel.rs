//! Model-comparison table: one row per grid entry, in backend order.

#[cfg(test)]
#[path = "comparison_panel_test.rs"]
mod comparison_panel_test;

use leptos::prelude::*;

use schema::{ComparisonResponse, PredictionResult};

use crate::util::format::{format_epsilon, format_percent};
use crate::util::severity::{comparison_label, confidence_class, prediction_class};

/// Comparison table across the whole model/ε grid.
#[component]
pub fn ComparisonPanel(comparison: RwSignal<Option<ComparisonResponse>>) -> impl IntoView {
    view! {
        <Show when=move || comparison.get().is_some()>
            <div class="card comparison">
                <h3 class="comparison__title">"Model Comparison"</h3>
                <div class="comparison__scroll">
                    <table class="comparison__table">
                        <thead>
                            <tr>
                                <th>"Model & Privacy"</th>
                                <th>"Prediction"</th>
                                <th>"Probability"</th>
                                <th>"Confidence"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                comparison.get().map(|response| {
                                    response
                                        .comparison
                                        .iter()
                                        .map(|(_, result)| comparison_row(result.clone()))
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </Show>
    }
}

/// One table row for a grid entry.
fn comparison_row(result: PredictionResult) -> impl IntoView {
    let title = row_title(&result);
    let label = comparison_label(result.prediction);
    let label_class = format!("comparison__pill {}", prediction_class(result.prediction));
    let probability = format_percent(result.probability);
    let confidence_css = format!("comparison__pill {}", confidence_class(result.confidence));
    let confidence = result.confidence.as_str();

    view! {
        <tr>
            <td class="comparison__model">{title}</td>
            <td><span class=label_class>{label}</span></td>
            <td>{probability}</td>
            <td><span class=confidence_css>{confidence}</span></td>
        </tr>
    }
}

/// Row heading pairing model and ε, e.g. `"MLP (ε=5)"`.
fn row_title(result: &PredictionResult) -> String {
    format!(
        "{} (ε={})",
        result.model_name,
        format_epsilon(result.privacy_budget)
    )
}
