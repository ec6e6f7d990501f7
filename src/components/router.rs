//! Application router component.
//!
//! Maps the three fixed URL paths to their views using history-based
//! client-side routing:
//!
//! - `/` → [`Landing`]
//! - `/soil` → [`SoilAnalysis`]
//! - `/weather` → [`WeatherPrediction`]
//!
//! The router provides the location and intercepts same-origin `<a href>`
//! clicks, so the navigation bar and feature cards use plain links. Path
//! resolution goes through [`AppRoute::from_path`] only: matching is exact
//! and any other path (`/soil/`, `/about`) renders nothing.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::landing::Landing;
use crate::components::soil::SoilAnalysis;
use crate::components::weather::WeatherPrediction;
use crate::models::AppRoute;
use crate::utils::dom;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <CurrentRoute />
        </Router>
    }
}

/// Renders the view for the router's current path.
#[component]
fn CurrentRoute() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let route = Memo::new(move |_| pathname.with(|path| AppRoute::from_path(path)));

    move || match route.get() {
        Some(route) => route_view(route),
        None => {
            dom::warn(&format!(
                "No view is defined for path {}",
                pathname.get_untracked()
            ));
            ().into_any()
        }
    }
}

/// View component for a resolved route.
fn route_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <Landing /> }.into_any(),
        AppRoute::Soil => view! { <SoilAnalysis /> }.into_any(),
        AppRoute::Weather => view! { <WeatherPrediction /> }.into_any(),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::mount::mount_to;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Point the browser at `path`, then mount the router into a fresh container.
    fn mount_at(path: &str) -> web_sys::HtmlElement {
        let window = web_sys::window().unwrap();
        window
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .unwrap();

        let document = document();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), AppRouter).forget();
        container
    }

    fn has(container: &web_sys::HtmlElement, selector: &str) -> bool {
        container.query_selector(selector).unwrap().is_some()
    }

    #[wasm_bindgen_test]
    fn root_renders_landing() {
        let container = mount_at("/");
        assert!(has(&container, "[data-section=hero]"));
        assert!(!has(&container, "[data-page]"));
    }

    #[wasm_bindgen_test]
    fn soil_path_renders_soil_page() {
        let container = mount_at("/soil");
        assert!(has(&container, "[data-page=soil]"));
        assert!(!has(&container, "[data-section=hero]"));
    }

    #[wasm_bindgen_test]
    fn weather_path_renders_weather_page() {
        let container = mount_at("/weather");
        assert!(has(&container, "[data-page=weather]"));
        assert!(!has(&container, "[data-section=hero]"));
    }

    #[wasm_bindgen_test]
    fn trailing_slash_renders_nothing() {
        let container = mount_at("/soil/");
        assert!(!has(&container, "[data-page]"));
        assert!(!has(&container, "[data-section]"));
    }

    #[wasm_bindgen_test]
    fn unknown_path_renders_nothing() {
        let container = mount_at("/about");
        assert!(!has(&container, "[data-page]"));
        assert!(!has(&container, "[data-section]"));
        assert_eq!(container.child_element_count(), 0);
    }
}
