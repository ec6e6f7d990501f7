//! Static route table for client-side navigation.

/// Top-level views reachable by URL path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Marketing landing page: `/`
    Landing,
    /// Soil fertility analysis: `/soil`
    Soil,
    /// Temperature prediction: `/weather`
    Weather,
}

impl AppRoute {
    /// Every route, in table order.
    pub const ALL: [AppRoute; 3] = [Self::Landing, Self::Soil, Self::Weather];

    /// Feature routes linked from the navigation and the feature cards.
    pub const FEATURES: [AppRoute; 2] = [Self::Soil, Self::Weather];

    /// URL path for this route.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Soil => "/soil",
            Self::Weather => "/weather",
        }
    }

    /// Resolve a URL path. Only exact matches resolve; there is no catch-all.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Soil => "Soil Analysis",
            Self::Weather => "Weather Prediction",
        }
    }

    /// One-line summary used on feature cards.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Landing => "",
            Self::Soil => {
                "Enter twelve nutrient readings from a soil test and get a fertility rating."
            }
            Self::Weather => {
                "Enter current humidity, wind speed and pressure to forecast the temperature."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(AppRoute::Landing.path(), "/");
        assert_eq!(AppRoute::Soil.path(), "/soil");
        assert_eq!(AppRoute::Weather.path(), "/weather");
    }

    #[test]
    fn test_from_path_inverts_path() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        assert_eq!(AppRoute::from_path(""), None);
        assert_eq!(AppRoute::from_path("/soil/"), None);
        assert_eq!(AppRoute::from_path("/soil/extra"), None);
        assert_eq!(AppRoute::from_path("/SOIL"), None);
        assert_eq!(AppRoute::from_path("/about"), None);
        assert_eq!(AppRoute::from_path("soil"), None);
    }

    #[test]
    fn test_features_exclude_landing() {
        assert!(!AppRoute::FEATURES.contains(&AppRoute::Landing));
        assert!(AppRoute::FEATURES.iter().all(|r| !r.summary().is_empty()));
    }
}
