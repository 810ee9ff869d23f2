//! Settings routes - View options the frontend needs

pub mod api;

pub use api::api_settings;
