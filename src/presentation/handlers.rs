// HTTP request handlers
use crate::application::refresh_service::DashboardState;
use crate::domain::dashboard::{Dashboard, TableRow};
use crate::domain::table::TableQuery;
use crate::presentation::app_state::AppState;
use crate::presentation::sse::sse_from_receiver;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    pub error: Option<String>,
    pub dashboard: Option<Dashboard>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Raw state: phase, error flag and the latest snapshot
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    Json(state.refresh_service.current())
}

/// Cards, charts, table and AI analysis built from the latest snapshot.
/// Errors are reported next to the last good data, never instead of it.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let current = state.refresh_service.current();
    Json(DashboardView {
        loading: current.loading,
        error: current.error,
        dashboard: state.dashboard_service.get_dashboard(),
    })
}

/// Readings table with optional sort and filters
pub async fn get_readings(
    Query(query): Query<TableQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<TableRow>> {
    Json(state.dashboard_service.get_readings(&query).unwrap_or_default())
}

/// Manual refresh, outside the timer cadence
pub async fn refresh(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    let outcome = state.refresh_service.refresh().await;
    tracing::info!(?outcome, "manual refresh finished");
    Json(state.refresh_service.current())
}

/// Stream of state changes as server-sent events
pub async fn stream_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    sse_from_receiver(state.refresh_service.subscribe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::refresh_service::RefreshService;
    use crate::application::refresh_service::tests::{ScriptedSource, row};
    use crate::application::sheet_source::FetchError;

    fn app_state(source: Arc<ScriptedSource>) -> Arc<AppState> {
        let refresh_service = RefreshService::new(source);
        Arc::new(AppState {
            dashboard_service: DashboardService::new(refresh_service.clone()),
            refresh_service,
        })
    }

    #[tokio::test]
    async fn test_dashboard_loading_before_first_refresh() {
        let state = app_state(Arc::new(ScriptedSource::default()));
        let Json(view) = get_dashboard(State(state.clone())).await;
        assert!(view.loading);
        assert!(view.dashboard.is_none());

        let Json(rows) = get_readings(Query(TableQuery::default()), State(state)).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_then_error_keeps_dashboard() {
        let source = Arc::new(ScriptedSource::default());
        source.push(Ok(vec![row("10:00", 21.5)]));
        source.push(Err(FetchError::Envelope { len: 0 }));
        let state = app_state(source);

        let Json(after_ok) = refresh(State(state.clone())).await;
        assert!(!after_ok.loading);
        assert_eq!(after_ok.snapshot.as_ref().unwrap().reading_count(), 1);

        let Json(after_err) = refresh(State(state.clone())).await;
        assert!(after_err.error.is_some());

        let Json(view) = get_dashboard(State(state)).await;
        assert!(view.error.is_some());
        assert_eq!(view.dashboard.unwrap().rows.len(), 1);
    }

    #[tokio::test]
    async fn test_state_serializes_for_consumers() {
        let source = Arc::new(ScriptedSource::default());
        source.push(Ok(vec![row("10:00", 21.5)]));
        let state = app_state(source);
        refresh(State(state.clone())).await;

        let Json(current) = get_state(State(state)).await;
        let json = serde_json::to_value(&current).unwrap();
        assert_eq!(json["phase"], "idle");
        assert!(json["lastUpdated"].is_string());
        assert!(json.get("last_updated").is_none());
        assert_eq!(json["snapshot"]["temperatures"][0], 21.5);
        assert_eq!(json["snapshot"]["actions"]["None"], 1);
        assert_eq!(json["snapshot"]["readings"][0]["imageUrl"], serde_json::Value::Null);
    }
}
