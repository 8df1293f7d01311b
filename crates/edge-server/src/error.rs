use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use edge_core::error::EdgeError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<EdgeError>() {
            match e {
                EdgeError::InvalidRole(_) | EdgeError::InvalidDeployEnv(_) => {
                    StatusCode::BAD_REQUEST
                }
                EdgeError::HubNotFound(_) | EdgeError::RouteNotFound(_) => StatusCode::NOT_FOUND,
                EdgeError::ConfigNotFound(_) | EdgeError::Io(_) | EdgeError::Yaml(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
