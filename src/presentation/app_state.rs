// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::snapshot_loader::SnapshotLoader;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub snapshot_loader: SnapshotLoader,
}
