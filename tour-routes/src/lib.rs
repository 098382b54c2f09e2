//! Typed client for the tour-route listing endpoints.
//!
//! Responses are returned as-is; nothing is cached between calls.
mod client;
mod error;
mod models;

pub use client::TourRoutesClient;
pub use error::Error;
pub use models::{Picture, ResourceType, TourRoute, TourRoutesPage};
