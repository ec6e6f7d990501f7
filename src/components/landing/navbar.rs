//! Top navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::config::{APP_NAME, MOBILE_MEDIA_QUERY};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/landing/navbar.module.css");

/// Navigation bar with one link per route.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Links inline next to the brand |
/// | Mobile (<= 768px) | Links collapsed behind a menu toggle |
#[component]
pub fn Navbar() -> impl IntoView {
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);
    let menu_open = RwSignal::new(false);

    let links = AppRoute::ALL
        .into_iter()
        .map(|route| {
            view! {
                <a class=css::link href=route.path() on:click=move |_| menu_open.set(false)>
                    <Icon icon=ic::for_route(route) />
                    <span>{route.label()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    let links_class = move || {
        if is_mobile.get() && !menu_open.get() {
            format!("{} {}", css::links, css::linksHidden)
        } else {
            css::links.to_string()
        }
    };

    view! {
        <nav class=css::navbar data-section="navbar">
            <a class=css::brand href=AppRoute::Landing.path()>
                <Icon icon=ic::SOIL />
                <span>{APP_NAME}</span>
            </a>

            <Show when=move || is_mobile.get()>
                <button
                    class=css::menuButton
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </Show>

            <div class=links_class>{links}</div>
        </nav>
    }
}
