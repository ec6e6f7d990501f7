//! Root application module.

use leptos::prelude::*;

use crate::components::AppRouter;

/// Root application component.
///
/// Renders the router, which selects the view for the current path.
/// Panics are reported to the console by the hook installed in `main`.
#[component]
pub fn App() -> impl IntoView {
    view! { <AppRouter /> }
}
