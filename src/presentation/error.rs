// HTTP error mapping
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const UPSTREAM_FAILURE_MESSAGE: &str = "Couldn't load weather right now. Try refresh in a moment.";

/// Error body returned to dashboard clients
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    /// A forecast fetch failed, so no dashboard is rendered
    Upstream(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Upstream(e) => {
                tracing::warn!("Forecast refresh failed: {:#}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    ApiError {
                        code: "UPSTREAM_UNAVAILABLE",
                        message: UPSTREAM_FAILURE_MESSAGE.to_string(),
                    },
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Upstream(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failure_is_bad_gateway() {
        let response = AppError::Upstream(anyhow::anyhow!("timeout")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
