//! Prediction results card: placeholder, error affordance, or the result.

#[cfg(test)]
#[path = "results_display_test.rs"]
mod results_display_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use schema::PredictionResult;

use crate::net::api::ApiError;
use crate::util::format::{format_epsilon, format_percent};
use crate::util::severity::{
    confidence_class, prediction_class, prediction_label, probability_class,
};

/// What the results area shows for a given state combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DisplayMode {
    /// Nothing to show yet.
    Empty,
    /// A request is in flight and no earlier result exists.
    Placeholder,
    /// The last submission failed.
    Error,
    /// A result is available; it stays visible during re-submits.
    Result,
}

/// Pick the mode. An in-flight first request shows the placeholder; an
/// error always replaces the card once the request settles.
fn display_mode(loading: bool, has_result: bool, has_error: bool) -> DisplayMode {
    if loading && !has_result {
        DisplayMode::Placeholder
    } else if has_error {
        DisplayMode::Error
    } else if has_result {
        DisplayMode::Result
    } else {
        DisplayMode::Empty
    }
}

/// Prediction results panel.
#[component]
pub fn ResultsDisplay(
    results: RwSignal<Option<PredictionResult>>,
    error: RwSignal<Option<ApiError>>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    move || {
        let mode = display_mode(loading.get(), results.get().is_some(), error.get().is_some());
        match mode {
            DisplayMode::Empty => view! { <></> }.into_any(),
            DisplayMode::Placeholder => view! {
                <div class="card results">
                    <h3 class="results__title">"Prediction Results"</h3>
                    <div class="results__pulse">
                        <div class="results__pulse-bar results__pulse-bar--wide"></div>
                        <div class="results__pulse-bar"></div>
                    </div>
                </div>
            }
                .into_any(),
            DisplayMode::Error => view! {
                <div class="card results results--error">
                    <h3 class="results__title">"Prediction Results"</h3>
                    <p class="results__error">
                        {error.get().map(|failure| failure.to_string()).unwrap_or_default()}
                    </p>
                    <p class="results__hint">
                        "Check that the prediction service is reachable and try again."
                    </p>
                </div>
            }
                .into_any(),
            DisplayMode::Result => results.get().map(result_card).into_any(),
        }
    }
}

/// The populated card for one prediction.
fn result_card(result: PredictionResult) -> impl IntoView {
    let headline = prediction_label(result.prediction);
    let headline_class = format!("results__headline {}", prediction_class(result.prediction));
    let probability_text = format_percent(result.probability);
    let probability_css = format!("results__value {}", probability_class(result.probability));
    let confidence_css = format!("results__value {}", confidence_class(result.confidence));
    let confidence_text = result.confidence.as_str();
    let model = result.model_name;
    let epsilon = format_epsilon(result.privacy_budget);

    view! {
        <div class="card results">
            <h3 class="results__title">"Prediction Results"</h3>
            <div class="results__banner">
                <h4 class="results__subtitle">"Prediction"</h4>
                <p class=headline_class>{headline}</p>
            </div>
            <div class="results__metrics">
                <div class="results__metric">
                    <span class="results__metric-label">"Probability"</span>
                    <p class=probability_css>{probability_text}</p>
                </div>
                <div class="results__metric">
                    <span class="results__metric-label">"Confidence"</span>
                    <p class=confidence_css>{confidence_text}</p>
                </div>
            </div>
            <div class="results__meta">
                <p><strong>"Model: "</strong>{model}</p>
                <p><strong>"Privacy Budget (ε): "</strong>{epsilon}</p>
            </div>
            <div class="results__note">
                <p>
                    <strong>"Note: "</strong>
                    "This prediction is for research purposes only. Please consult "
                    "with a healthcare professional for actual diagnosis."
                </p>
            </div>
        </div>
    }
}
