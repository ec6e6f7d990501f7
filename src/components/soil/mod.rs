//! Soil fertility analysis page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::form::{ErrorNotice, NumericForm, PendingNotice};
use crate::components::page::{PageFrame, ResultCard, Tone};
use crate::core::ApiClient;
use crate::models::{
    AppRoute, Fertility, NumericField, RequestState, SOIL_FEATURES, SoilReport, SoilSample,
};
use crate::utils::dom;
use crate::utils::format::format_percent;

const FIELDS: &[NumericField] = &SOIL_FEATURES;

const INTRO: &str = "Enter the results of a standard soil test. All twelve \
    measurements are required; the model rates the sample's fertility as high or low.";

/// Soil analysis view, served at `/soil`.
#[component]
pub fn SoilAnalysis() -> impl IntoView {
    let state = RwSignal::new(RequestState::<SoilReport>::Idle);
    let pending = Signal::derive(move || state.with(|s| s.is_pending()));

    let on_submit = Callback::new(move |inputs: Vec<String>| {
        let sample = match SoilSample::from_inputs(&inputs) {
            Ok(sample) => sample,
            Err(e) => {
                state.set(RequestState::Failed(e.to_string()));
                return;
            }
        };

        state.set(RequestState::Pending);
        spawn_local(async move {
            let result = ApiClient::from_config().analyze_soil(&sample).await;
            if let Err(e) = &result {
                dom::error(&format!("Soil analysis failed: {}", e));
            }
            state.set(RequestState::from_result(result));
        });
    });

    view! {
        <PageFrame route=AppRoute::Soil intro=INTRO>
            <NumericForm
                fields=FIELDS
                submit_label="Analyze soil"
                pending=pending
                on_submit=on_submit
            />
            {move || match state.get() {
                RequestState::Idle => ().into_any(),
                RequestState::Pending => view! {
                    <PendingNotice message="Analyzing sample..." />
                }.into_any(),
                RequestState::Ready(report) => view! { <SoilResult report=report /> }.into_any(),
                RequestState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn SoilResult(report: SoilReport) -> impl IntoView {
    let tone = match report.fertility_status {
        Fertility::High => Tone::Good,
        Fertility::Low => Tone::Poor,
    };
    let detail = format!("{} confidence", format_percent(report.certainty()));

    view! {
        <ResultCard
            heading="Fertility"
            value=report.fertility_status.as_str().to_string()
            tone=tone
            detail=detail
        />
    }
}
