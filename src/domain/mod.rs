// Domain layer - Pure data models and lookups, no I/O
pub mod chart;
pub mod condition;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod format;
pub mod location;
