// Router wiring for the command and query surfaces
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    export_report, get_dashboard, get_history, get_resampled, get_snapshot, health_check,
    session_status, set_theme, set_time_range, start_session, stop_session, stream_dashboard,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    // The event stream is left uncompressed so each event is flushed as it is produced.
    let api = Router::new()
        .route("/session", get(session_status))
        .route("/session/start", post(start_session))
        .route("/session/stop", post(stop_session))
        .route("/time-range", put(set_time_range))
        .route("/theme", put(set_theme))
        .route("/snapshot", get(get_snapshot))
        .route("/history", get(get_history))
        .route("/history/resampled", get(get_resampled))
        .route("/dashboard", get(get_dashboard))
        .route("/reports", post(export_report))
        .layer(CompressionLayer::new());

    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard/stream", get(stream_dashboard))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::monitor_service::MonitorService;
    use crate::application::monitoring_session::MonitoringSession;
    use crate::application::report_exporter::ReportExporter;
    use crate::application::report_exporter::tests::MemorySink;
    use crate::application::sample_generator::SampleGenerator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> (Router, MonitorService) {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let session = MonitoringSession::new(t0, SampleGenerator::seeded(21));
        let exporter = ReportExporter::new(Arc::new(MemorySink::default()));
        let monitor_service = MonitorService::new(session, exporter).unwrap();
        let state = Arc::new(AppState {
            monitor_service: monitor_service.clone(),
        });
        (router(state), monitor_service)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = app();
        let response = app.oneshot(empty_request("GET", "/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_start_tick_and_snapshot() {
        let (app, service) = app();

        let (status, body) = send(&app, empty_request("POST", "/session/start")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "armed");

        service.tick().await.unwrap();
        service.tick().await.unwrap();

        let (_, body) = send(&app, empty_request("GET", "/history")).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (status, body) = send(&app, empty_request("GET", "/snapshot")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hrv"].as_array().unwrap().len(), 2);
        assert!(body["summary"]["averageHeartRate"].is_number());

        let (_, body) = send(&app, empty_request("POST", "/session/stop")).await;
        assert_eq!(body["state"], "idle");
        assert_eq!(body["sampleCount"], 3);
    }

    #[tokio::test]
    async fn test_resampled_with_explicit_granularity() {
        let (app, _) = app();

        let (status, body) =
            send(&app, empty_request("GET", "/history/resampled?granularity=raw")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "raw");

        let (_, body) = send(&app, empty_request("GET", "/history/resampled")).await;
        assert_eq!(body["kind"], "bucketed");
        assert_eq!(body["granularity"], "daily");
    }

    #[tokio::test]
    async fn test_invalid_granularity_is_bad_request() {
        let (app, _) = app();

        let (status, body) =
            send(&app, empty_request("GET", "/history/resampled?granularity=hourly")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("hourly"));

        let (status, _) = send(
            &app,
            json_request("PUT", "/time-range", serde_json::json!({ "granularity": "yearly" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preferences_reach_dashboard() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            json_request("PUT", "/time-range", serde_json::json!({ "granularity": "weekly" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timeRange"], "weekly");

        let (status, body) = send(
            &app,
            json_request("PUT", "/theme", serde_json::json!({ "theme": "dark" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backgroundColor"], "#343a40");

        let (_, body) = send(&app, empty_request("GET", "/dashboard")).await;
        assert_eq!(body["timeRange"], "weekly");
        assert_eq!(body["theme"], "dark");
        assert_eq!(body["analysis"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_export_report() {
        let (app, _) = app();

        let (status, body) = send(&app, empty_request("POST", "/reports")).await;
        assert_eq!(status, StatusCode::OK);
        let file_name = body["fileName"].as_str().unwrap();
        assert!(file_name.starts_with("heart_rate_report_"));
        assert!(file_name.ends_with(".txt"));
    }
}
