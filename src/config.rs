//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The prediction service address can be overridden at build time through
//! the `FARMSIGHT_API_URL` environment variable.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar and footer.
pub const APP_NAME: &str = "FarmSight";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Site Content
// =============================================================================

/// Static text shown on the landing page.
pub mod site {
    /// Hero section heading.
    pub const HERO_HEADING: &str = "Grow smarter with data from the ground up";

    /// Hero section paragraph.
    pub const HERO_TEXT: &str = "Analyze the fertility of your soil and forecast \
        tomorrow's temperature from a handful of field measurements.";

    /// Title attribute of the hero video frame.
    pub const HERO_VIDEO_TITLE: &str = "Farming in motion";

    /// Video shown in the hero section.
    pub const HERO_VIDEO_ID: &str = "kQWAXuP0pik";

    /// Heading of the secondary container.
    pub const FEATURES_HEADING: &str = "What you can do";

    /// Copyright holder shown in the footer.
    pub const COPYRIGHT: &str = "FarmSight contributors";
}

// =============================================================================
// Video Embed Configuration
// =============================================================================

/// Embedded player settings.
pub mod video {
    /// Base URL of the embeddable player.
    pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

    /// Permissions granted to the player frame.
    pub const FRAME_ALLOW: &str = "autoplay; encrypted-media; picture-in-picture";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Prediction service configuration.
pub mod api {
    /// Base URL of the prediction service.
    pub const BASE_URL: &str = match option_env!("FARMSIGHT_API_URL") {
        Some(url) => url,
        None => "http://127.0.0.1:5000",
    };

    /// Health check endpoint.
    pub const HEALTH_PATH: &str = "/";

    /// Soil fertility endpoint.
    pub const SOIL_ANALYSIS_PATH: &str = "/soil-analysis";

    /// Temperature forecast endpoint.
    pub const WEATHER_PREDICTION_PATH: &str = "/weather-prediction";
}

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewport width below which the navigation collapses into a menu.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
