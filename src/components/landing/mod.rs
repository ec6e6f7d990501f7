//! Landing page.
//!
//! Composes the navigation bar, hero banner, feature overview and footer
//! in a fixed vertical order.

mod footer;
mod hero;
mod navbar;
mod secondary;

use leptos::prelude::*;

pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use secondary::SecondaryContainer;

/// Root marketing page, served at `/`.
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <Navbar />
        <Hero />
        <SecondaryContainer />
        <Footer />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_landing() -> web_sys::HtmlElement {
        let document = document();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), Landing).forget();
        container
    }

    fn sections(container: &web_sys::HtmlElement) -> Vec<String> {
        let nodes = container.query_selector_all("[data-section]").unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .filter_map(|el| el.get_attribute("data-section"))
            .collect()
    }

    #[wasm_bindgen_test]
    fn landing_renders_sections_in_order() {
        let container = mount_landing();
        assert_eq!(
            sections(&container),
            vec!["navbar", "hero", "secondary", "footer"]
        );
    }

    #[wasm_bindgen_test]
    fn hero_heading_precedes_video() {
        let container = mount_landing();
        let hero = container
            .query_selector("[data-section=hero]")
            .unwrap()
            .unwrap();
        let inner = hero.inner_html();
        let heading_at = inner.find("<h1").unwrap();
        let video_at = inner.find("<iframe").unwrap();
        assert!(heading_at < video_at);
    }

    #[wasm_bindgen_test]
    fn hero_video_source_has_embed_parameters() {
        let container = mount_landing();
        let iframe = container.query_selector("iframe").unwrap().unwrap();
        let src = iframe.get_attribute("src").unwrap();
        assert!(src.contains("kQWAXuP0pik"));
        assert!(src.contains("autoplay=1"));
        assert!(src.contains("mute=1"));
        assert!(src.contains("loop=1"));
    }

    #[wasm_bindgen_test]
    fn navbar_links_every_route() {
        let container = mount_landing();
        let nav = container
            .query_selector("[data-section=navbar]")
            .unwrap()
            .unwrap();
        for route in crate::models::AppRoute::ALL {
            let selector = format!("a[href='{}']", route.path());
            assert!(nav.query_selector(&selector).unwrap().is_some());
        }
    }
}
