//! Page footer.

use leptos::prelude::*;

use crate::components::status::ApiStatus;
use crate::config::{APP_VERSION, site};
use crate::utils::dom;
use crate::utils::format::copyright;

stylance::import_crate_style!(css, "src/components/landing/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let notice = copyright(dom::current_year(), site::COPYRIGHT);

    view! {
        <footer class=css::footer data-section="footer">
            <span>{notice}</span>
            <ApiStatus />
            <span class=css::version>{format!("v{}", APP_VERSION)}</span>
        </footer>
    }
}
