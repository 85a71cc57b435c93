//! Survey form: renders the feature catalog and submits predictions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns the in-progress feature values and the model/privacy/
//! compare selection. Submission is guarded by the shared `loading` signal
//! and hands every outcome to the page container through callback props.

#[cfg(test)]
#[path = "feature_form_test.rs"]
mod feature_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use schema::catalog::{self, FeatureDescriptor, FeatureOption, FieldKind};
use schema::{ComparisonResponse, FeatureValues, ModelKind, PredictionRequest, PredictionResult, PrivacyBudget};

use crate::config::ApiConfig;
use crate::net::api::ApiError;
use crate::state::form::{self, FormSelection};

/// The survey form.
///
/// `loading` is shared with the page: set before the first request starts
/// and cleared after the last one settles, on success and failure alike.
#[component]
pub fn FeatureForm(
    on_results: Callback<PredictionResult>,
    on_comparison: Callback<ComparisonResponse>,
    on_error: Callback<ApiError>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let values = RwSignal::new(FeatureValues::new());
    let selection = RwSignal::new(FormSelection::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let current = values.get();
        let missing = form::missing_required(catalog::FEATURES, &current);
        if !missing.is_empty() {
            leptos::logging::warn!(
                "submission blocked, unanswered fields: {}",
                missing.join(", ")
            );
            return;
        }
        let picked = selection.get();
        let request = PredictionRequest {
            features: current,
            model_name: picked.model,
            privacy_budget: picked.privacy_budget,
        };

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::predict(&config, &request).await {
                    Ok(result) => on_results.run(result),
                    Err(error) => {
                        leptos::logging::error!("prediction request failed: {error}");
                        on_error.run(error);
                    }
                }
                if picked.compare_all {
                    match crate::net::api::compare(&config, &request).await {
                        Ok(response) => on_comparison.run(response),
                        Err(error) => {
                            leptos::logging::error!("comparison request failed: {error}");
                            on_error.run(error);
                        }
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, request, on_results, on_comparison, on_error);
        }
    };

    view! {
        <form class="card feature-form" on:submit=on_submit>
            <h2 class="feature-form__title">"Input Features"</h2>

            <div class="feature-form__grid">
                {catalog::FEATURES
                    .iter()
                    .map(|field| view! { <FeatureField field=field values=values/> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="feature-form__settings">
                <label class="feature-form__field">
                    <span class="feature-form__label">"Model Architecture"</span>
                    <select
                        class="feature-form__input"
                        prop:value=move || selection.get().model.wire_name()
                        on:change=move |ev| {
                            if let Ok(model) = event_target_value(&ev).parse::<ModelKind>() {
                                selection.update(|current| current.model = model);
                            }
                        }
                    >
                        {ModelKind::ALL
                            .into_iter()
                            .map(|model| view! {
                                <option value=model.wire_name()>{model.display_name()}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="feature-form__field">
                    <span class="feature-form__label">"Privacy Budget (ε)"</span>
                    <select
                        class="feature-form__input"
                        prop:value=move || selection.get().privacy_budget.epsilon().to_string()
                        on:change=move |ev| {
                            let parsed = event_target_value(&ev)
                                .parse::<f64>()
                                .ok()
                                .and_then(PrivacyBudget::from_epsilon);
                            if let Some(budget) = parsed {
                                selection.update(|current| current.privacy_budget = budget);
                            }
                        }
                    >
                        {PrivacyBudget::ALL
                            .into_iter()
                            .map(|budget| view! {
                                <option value=budget.epsilon().to_string()>{budget.label()}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="feature-form__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || selection.get().compare_all
                        on:change=move |ev| {
                            selection.update(|current| current.compare_all = event_target_checked(&ev));
                        }
                    />
                    <span>"Compare all models"</span>
                </label>
            </div>

            <button
                class="btn btn--primary feature-form__submit"
                type="submit"
                disabled=move || loading.get()
            >
                {move || submit_button_label(loading.get(), selection.get().compare_all)}
            </button>
        </form>
    }
}

/// One catalog-driven input: a bounded number entry or an option select.
#[component]
fn FeatureField(field: &'static FeatureDescriptor, values: RwSignal<FeatureValues>) -> impl IntoView {
    view! {
        <label class="feature-form__field">
            <span class="feature-form__label">{field.label}</span>
            {match field.kind {
                FieldKind::Select => view! {
                    <select
                        class="feature-form__input"
                        required=true
                        on:change=move |ev| {
                            values.update(|current| form::set_field(current, field, &event_target_value(&ev)));
                        }
                    >
                        <option value="">{format!("Select {}", field.label)}</option>
                        {field
                            .options
                            .iter()
                            .map(|option| view! {
                                <option value=option.code>{option_text(option)}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                }
                    .into_any(),
                kind => view! {
                    <input
                        class="feature-form__input"
                        type=input_type(kind)
                        step="0.1"
                        min=field.min.map(|bound| bound.to_string())
                        max=field.max.map(|bound| bound.to_string())
                        required=true
                        on:input=move |ev| {
                            values.update(|current| form::set_field(current, field, &event_target_value(&ev)));
                        }
                    />
                }
                    .into_any(),
            }}
        </label>
    }
}

/// HTML input type for non-select field kinds.
fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Date => "date",
        FieldKind::Text => "text",
        _ => "number",
    }
}

/// Submit label: progress text while loading, otherwise the action name.
fn submit_button_label(loading: bool, compare_all: bool) -> &'static str {
    if loading {
        "Processing..."
    } else if compare_all {
        "Compare All Models"
    } else {
        "Predict"
    }
}

/// Dropdown text pairing the wire code with its meaning, e.g. `"0: Male"`.
fn option_text(option: &FeatureOption) -> String {
    format!("{}: {}", option.code, option.display)
}
