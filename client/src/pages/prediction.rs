//! Prediction page: the survey form, its results, and the research sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the only state that survives a request/response cycle:
//! the latest result, the latest comparison, the in-flight flag, and the
//! last error. Everything below it renders from these signals.

use leptos::prelude::*;

use schema::{ComparisonResponse, PredictionResult};

use crate::components::comparison_panel::ComparisonPanel;
use crate::components::feature_form::FeatureForm;
use crate::components::research_info::ResearchInfo;
use crate::components::results_display::ResultsDisplay;
use crate::net::api::ApiError;

#[component]
pub fn PredictionPage() -> impl IntoView {
    let results = RwSignal::new(None::<PredictionResult>);
    let comparison = RwSignal::new(None::<ComparisonResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<ApiError>);

    let on_results = Callback::new(move |result: PredictionResult| {
        error.set(None);
        results.set(Some(result));
    });
    let on_comparison = Callback::new(move |response: ComparisonResponse| {
        comparison.set(Some(response));
    });
    let on_error = Callback::new(move |failure: ApiError| {
        error.set(Some(failure));
    });

    view! {
        <div class="prediction-page">
            <header class="prediction-page__header">
                <h1>"Mental Health Prediction Research Platform"</h1>
                <p>
                    "Federated Learning with Differential Privacy & Simulated "
                    "Secure Aggregation"
                </p>
            </header>
            <div class="prediction-page__grid">
                <div class="prediction-page__main">
                    <FeatureForm
                        on_results=on_results
                        on_comparison=on_comparison
                        on_error=on_error
                        loading=loading
                    />
                    <ResultsDisplay results=results error=error loading=loading/>
                    <ComparisonPanel comparison=comparison/>
                </div>
                <ResearchInfo/>
            </div>
        </div>
    }
}
