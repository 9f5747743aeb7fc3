// Application layer - Dashboard composition over an immutable forecast snapshot
pub mod chart_geometry;
pub mod comparison;
pub mod dashboard_service;
pub mod details;
pub mod forecast_source;
pub mod hero;
pub mod precip_timeline;
pub mod series_aligner;
pub mod snapshot_loader;

#[cfg(test)]
pub mod fixtures;
