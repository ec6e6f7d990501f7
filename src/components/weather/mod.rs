//! Temperature prediction page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::form::{ErrorNotice, NumericForm, PendingNotice};
use crate::components::page::{PageFrame, ResultCard};
use crate::core::ApiClient;
use crate::models::{
    AppRoute, NumericField, RequestState, WEATHER_FEATURES, WeatherForecast, WeatherReadings,
};
use crate::utils::dom;
use crate::utils::format::format_celsius;

const FIELDS: &[NumericField] = &WEATHER_FEATURES;

const INTRO: &str = "Enter the current humidity, wind speed and air pressure \
    to forecast the temperature.";

/// Weather prediction view, served at `/weather`.
#[component]
pub fn WeatherPrediction() -> impl IntoView {
    let state = RwSignal::new(RequestState::<WeatherForecast>::Idle);
    let pending = Signal::derive(move || state.with(|s| s.is_pending()));

    let on_submit = Callback::new(move |inputs: Vec<String>| {
        let readings = match WeatherReadings::from_inputs(&inputs) {
            Ok(readings) => readings,
            Err(e) => {
                state.set(RequestState::Failed(e.to_string()));
                return;
            }
        };

        state.set(RequestState::Pending);
        spawn_local(async move {
            let result = ApiClient::from_config().predict_weather(&readings).await;
            if let Err(e) = &result {
                dom::error(&format!("Weather prediction failed: {}", e));
            }
            state.set(RequestState::from_result(result));
        });
    });

    view! {
        <PageFrame route=AppRoute::Weather intro=INTRO>
            <NumericForm
                fields=FIELDS
                submit_label="Predict temperature"
                pending=pending
                on_submit=on_submit
            />
            {move || match state.get() {
                RequestState::Idle => ().into_any(),
                RequestState::Pending => view! {
                    <PendingNotice message="Running forecast..." />
                }.into_any(),
                RequestState::Ready(forecast) => view! {
                    <ResultCard
                        heading="Predicted temperature"
                        value=format_celsius(forecast.predicted_temperature)
                    />
                }.into_any(),
                RequestState::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
            }}
        </PageFrame>
    }
}
