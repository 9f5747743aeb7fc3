// Presentation layer - HTTP handlers serving structured dashboard JSON
pub mod app_state;
pub mod error;
pub mod handlers;
