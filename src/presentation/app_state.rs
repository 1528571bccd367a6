// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::refresh_service::RefreshService;

#[derive(Clone)]
pub struct AppState {
    pub refresh_service: RefreshService,
    pub dashboard_service: DashboardService,
}
