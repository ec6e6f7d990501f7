//! Frame shared by the feature pages: navigation, heading, content, footer.

use leptos::prelude::*;

use crate::components::landing::{Footer, Navbar};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/page/page.module.css");

/// Page wrapper marked with `data-page` so the rendered route is observable.
#[component]
pub fn PageFrame(route: AppRoute, intro: &'static str, children: Children) -> impl IntoView {
    let page = match route {
        AppRoute::Landing => "landing",
        AppRoute::Soil => "soil",
        AppRoute::Weather => "weather",
    };

    view! {
        <div class=css::page data-page=page>
            <Navbar />
            <main class=css::content>
                <h1 class=css::title>{route.label()}</h1>
                <p class=css::intro>{intro}</p>
                {children()}
            </main>
            <Footer />
        </div>
    }
}

/// Emphasis applied to a result value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Good,
    Poor,
}

/// Card presenting a single prediction result.
#[component]
pub fn ResultCard(
    heading: &'static str,
    value: String,
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] detail: Option<String>,
) -> impl IntoView {
    let value_class = match tone {
        Tone::Neutral => css::resultValue.to_string(),
        Tone::Good => format!("{} {}", css::resultValue, css::resultHigh),
        Tone::Poor => format!("{} {}", css::resultValue, css::resultLow),
    };

    view! {
        <section class=css::result aria-live="polite">
            <span>{heading}</span>
            <p class=value_class>{value}</p>
            {detail.map(|detail| view! { <p class=css::resultDetail>{detail}</p> })}
        </section>
    }
}
