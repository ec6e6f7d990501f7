//! Prediction service status indicator.
//!
//! Checks the service health once when mounted and shows whether the
//! soil and weather models are available.

use leptos::prelude::*;

use crate::core::ApiClient;
use crate::models::{HealthStatus, RequestState};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status indicator for the prediction service.
///
/// | State | Display |
/// |-------|---------|
/// | Request in flight | grey dot, `Checking service...` |
/// | Healthy response | green dot, `Service online` + model badges |
/// | Error or unhealthy | red dot, `Service offline` |
#[component]
pub fn ApiStatus() -> impl IntoView {
    let health = RwSignal::new(RequestState::<HealthStatus>::Pending);

    wasm_bindgen_futures::spawn_local(async move {
        let result = ApiClient::from_config().health().await;
        if let Err(e) = &result {
            dom::warn(&format!("Prediction service unreachable: {}", e));
        }
        health.set(RequestState::from_result(result));
    });

    view! { <StatusIndicator health=health /> }
}

/// Renders a health check state; `data-state` is `checking`, `online` or `offline`.
#[component]
pub fn StatusIndicator(#[prop(into)] health: Signal<RequestState<HealthStatus>>) -> impl IntoView {
    let state = move || {
        health.with(|h| match h {
            RequestState::Idle | RequestState::Pending => "checking",
            RequestState::Ready(status) if status.is_healthy() => "online",
            RequestState::Ready(_) | RequestState::Failed(_) => "offline",
        })
    };

    view! {
        <span class=css::status data-state=state>
            {move || match health.get() {
                RequestState::Idle | RequestState::Pending => view! {
                    <span class=css::dot></span>
                    <span>"Checking service..."</span>
                }.into_any(),
                RequestState::Ready(status) if status.is_healthy() => {
                    let models = status.models_loaded;
                    view! {
                        <span class=format!("{} {}", css::dot, css::dotOnline)></span>
                        <span>"Service online"</span>
                        <span class=css::models>
                            <ModelBadge name="soil" loaded=models.soil_analysis />
                            <ModelBadge name="weather" loaded=models.weather_prediction />
                        </span>
                    }.into_any()
                }
                RequestState::Ready(_) | RequestState::Failed(_) => view! {
                    <span class=format!("{} {}", css::dot, css::dotOffline)></span>
                    <span>"Service offline"</span>
                }.into_any(),
            }}
        </span>
    }
}

#[component]
fn ModelBadge(name: &'static str, loaded: bool) -> impl IntoView {
    let class = if loaded {
        css::model.to_string()
    } else {
        format!("{} {}", css::model, css::modelMissing)
    };
    let title = if loaded {
        "Model loaded"
    } else {
        "Model not loaded"
    };

    view! { <span class=class title=title>{name}</span> }
}
