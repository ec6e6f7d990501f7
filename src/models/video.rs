//! Embedded video player description.

use crate::config::{site, video};

/// Parameters for an embedded third-party video player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEmbed {
    pub video_id: &'static str,
    pub autoplay: bool,
    pub muted: bool,
    pub looped: bool,
    pub controls: bool,
}

impl VideoEmbed {
    /// Background video for the landing hero: autoplaying, muted, looped,
    /// without player controls.
    pub const fn hero() -> Self {
        Self {
            video_id: site::HERO_VIDEO_ID,
            autoplay: true,
            muted: true,
            looped: true,
            controls: false,
        }
    }

    /// Player URL with query parameters.
    ///
    /// Looping a single video requires the player to treat it as a one-item
    /// playlist, so `playlist=<id>` accompanies `loop=1`.
    pub fn embed_url(&self) -> String {
        let flag = |on: bool| if on { 1 } else { 0 };

        let mut url = format!(
            "{}/{}?autoplay={}&mute={}&loop={}",
            video::EMBED_BASE_URL,
            self.video_id,
            flag(self.autoplay),
            flag(self.muted),
            flag(self.looped),
        );
        if self.looped {
            url.push_str("&playlist=");
            url.push_str(self.video_id);
        }
        url.push_str(&format!("&controls={}", flag(self.controls)));
        url
    }
}
