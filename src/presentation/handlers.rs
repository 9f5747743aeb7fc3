// HTTP request handlers
use crate::domain::dashboard::Dashboard;
use crate::domain::location::Location;
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub primary: Option<String>,
}

#[derive(Serialize)]
pub struct LocationOption {
    pub id: String,
    pub label: String,
    pub short_name: String,
}

#[derive(Serialize)]
pub struct LocationsResponse {
    pub default_location: String,
    pub locations: Vec<LocationOption>,
}

impl From<&Location> for LocationOption {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.clone(),
            label: location.display_label().to_string(),
            short_name: location.short_name.clone(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Configured locations for the location picker
pub async fn list_locations(State(state): State<Arc<AppState>>) -> Json<LocationsResponse> {
    let service = &state.dashboard_service;
    Json(LocationsResponse {
        default_location: service.default_location_id().to_string(),
        locations: service.locations().iter().map(LocationOption::from).collect(),
    })
}

/// Fetch every location, then render the dashboard around the selected primary
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, AppError> {
    let service = &state.dashboard_service;
    let snapshot = state.snapshot_loader.load(service.locations()).await?;

    Ok(Json(service.render(&snapshot, query.primary.as_deref())))
}
