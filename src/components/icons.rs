//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::AppRoute;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleAlert as Alert, LuCloudSun as Weather, LuHouse as Home, LuMenu as Menu,
        LuSprout as Soil, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCloudSun as Weather, BsExclamationCircle as Alert, BsFlower1 as Soil,
        BsHouseFill as Home, BsList as Menu, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(SOIL, Soil);
themed_icon!(WEATHER, Weather);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(ALERT, Alert);

/// Icon shown next to a route's navigation label.
pub const fn for_route(route: AppRoute) -> Icon {
    match route {
        AppRoute::Landing => HOME,
        AppRoute::Soil => SOIL,
        AppRoute::Weather => WEATHER,
    }
}
