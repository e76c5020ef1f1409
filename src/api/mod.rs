use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    ErrorKind, MeteoError, VERSION,
    report::{ReportService, WeatherReport},
};

#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/get_weather", post(get_weather))
        .route("/health", get(health))
        .with_state(service)
}

async fn get_weather(
    State(service): State<Arc<ReportService>>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherReport>, MeteoError> {
    let Json(request) = payload.map_err(|rejection| {
        MeteoError::validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let report = service.build_report(&request.city).await?;
    Ok(Json(report))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: VERSION,
    })
}

impl IntoResponse for MeteoError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::Input => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Server => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }

        let body = ErrorBody {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
