// HTTP request handlers
use crate::application::monitor_service::SessionStatus;
use crate::application::monitoring_session::DashboardView;
use crate::application::report_exporter::ExportedReport;
use crate::application::resampler::HistoricalView;
use crate::domain::granularity::Granularity;
use crate::domain::metrics::MetricsSnapshot;
use crate::domain::sample::Sample;
use crate::domain::theme::{Theme, ThemeStyle};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json,
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ResampleQuery {
    pub granularity: Option<String>,
}

#[derive(Deserialize)]
pub struct TimeRangeRequest {
    pub granularity: String,
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeResponse {
    pub time_range: Granularity,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn start_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionStatus>, ApiError> {
    Ok(Json(state.monitor_service.start().await?))
}

pub async fn stop_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionStatus>, ApiError> {
    Ok(Json(state.monitor_service.stop().await?))
}

pub async fn session_status(State(state): State<Arc<AppState>>) -> Json<SessionStatus> {
    Json(state.monitor_service.status().await)
}

pub async fn set_time_range(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TimeRangeRequest>,
) -> Result<Json<TimeRangeResponse>, ApiError> {
    let granularity: Granularity = request.granularity.parse()?;
    let time_range = state.monitor_service.set_time_range(granularity).await?;
    Ok(Json(TimeRangeResponse { time_range }))
}

pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ThemeRequest>,
) -> Result<Json<ThemeStyle>, ApiError> {
    let theme: Theme = request.theme.parse()?;
    Ok(Json(state.monitor_service.set_theme(theme).await?))
}

pub async fn get_snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetricsSnapshot>, ApiError> {
    Ok(Json(state.monitor_service.snapshot().await?))
}

pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<Sample>> {
    Json(state.monitor_service.history().await)
}

/// Historical view at the requested granularity, or at the selected time range
pub async fn get_resampled(
    Query(query): Query<ResampleQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<HistoricalView>, ApiError> {
    let granularity = query
        .granularity
        .as_deref()
        .map(str::parse::<Granularity>)
        .transpose()?;
    Ok(Json(state.monitor_service.resampled(granularity).await))
}

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardView>, ApiError> {
    Ok(Json(state.monitor_service.dashboard().await?))
}

/// Server-sent events carrying every published dashboard view
pub async fn stream_dashboard(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.monitor_service.subscribe();

    let stream = async_stream::stream! {
        loop {
            let view = rx.borrow_and_update().clone();
            match Event::default().event("dashboard").json_data(&*view) {
                Ok(event) => yield Ok(event),
                Err(e) => tracing::warn!("Failed to encode dashboard event: {}", e),
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

pub async fn export_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExportedReport>, ApiError> {
    Ok(Json(state.monitor_service.export_report().await?))
}
