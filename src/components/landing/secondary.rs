//! Feature overview shown below the hero.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::site;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/landing/secondary.module.css");

#[component]
pub fn SecondaryContainer() -> impl IntoView {
    let cards = AppRoute::FEATURES
        .into_iter()
        .map(|route| {
            view! {
                <a class=css::card href=route.path()>
                    <span class=css::cardIcon><Icon icon=ic::for_route(route) /></span>
                    <h3 class=css::cardTitle>{route.label()}</h3>
                    <p class=css::cardText>{route.summary()}</p>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class=css::secondary data-section="secondary">
            <h2 class=css::heading>{site::FEATURES_HEADING}</h2>
            <div class=css::cards>{cards}</div>
        </section>
    }
}
