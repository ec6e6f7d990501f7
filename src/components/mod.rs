//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`landing`] - Landing page: navigation, hero, features, footer
//! - [`soil`] - Soil fertility analysis page
//! - [`weather`] - Temperature prediction page
//! - [`page`] - Frame and result card shared by the feature pages
//! - [`form`] - Numeric input form
//! - [`status`] - Prediction service status indicator
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod form;
pub mod icons;
pub mod landing;
pub mod page;
pub mod router;
pub mod soil;
pub mod status;
pub mod weather;

pub use router::AppRouter;
