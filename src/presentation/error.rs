// Mapping of core errors onto HTTP responses
use crate::domain::error::MonitorError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub struct ApiError(MonitorError);

impl From<MonitorError> for ApiError {
    fn from(err: MonitorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MonitorError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            MonitorError::EmptyStore | MonitorError::ExportFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_client_error() {
            tracing::warn!("Rejected request: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
