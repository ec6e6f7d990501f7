//! Core logic for talking to the prediction service.
//!
//! This module provides:
//! - [`ApiClient`] for the health, soil and weather endpoints
//! - [`error`] types for network and form input failures

mod api;
pub mod error;

pub use api::ApiClient;
