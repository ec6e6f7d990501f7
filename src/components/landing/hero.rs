//! Full-width hero banner with a background video.

use leptos::prelude::*;

use crate::config::{site, video};
use crate::models::VideoEmbed;

stylance::import_crate_style!(css, "src/components/landing/hero.module.css");

/// Hero section: heading and paragraph over an autoplaying, muted,
/// looped video. A failed video load leaves the text on a blank backdrop.
#[component]
pub fn Hero() -> impl IntoView {
    let embed_url = VideoEmbed::hero().embed_url();

    view! {
        <section class=css::hero data-section="hero">
            <div class=css::copy>
                <h1 class=css::heading>{site::HERO_HEADING}</h1>
                <p class=css::text>{site::HERO_TEXT}</p>
            </div>

            <div class=css::videoFrame>
                <iframe
                    class=css::video
                    src=embed_url
                    title=site::HERO_VIDEO_TITLE
                    allow=video::FRAME_ALLOW
                    allowfullscreen=true
                ></iframe>
            </div>
        </section>
    }
}
