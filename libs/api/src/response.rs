use axum::{http::StatusCode, response::IntoResponse};
use backend::{BackendError, BackendResult};
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code;
        let mut _message = "".to_string();

        match self {
            ApiError::AuthError(message) => {
                status_code = StatusCode::UNAUTHORIZED;
                _message = message;
            }
            ApiError::ClientError(message) => {
                status_code = StatusCode::BAD_REQUEST;
                _message = message;
            }
            ApiError::NotFoundError(message) => {
                status_code = StatusCode::NOT_FOUND;
                _message = message;
            }
            ApiError::ServerError(message) => {
                status_code = StatusCode::INTERNAL_SERVER_ERROR;
                _message = message;
            }
        }
        (status_code, _message).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for BackendResult<T> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{}: {}", message, e);
            match e {
                BackendError::Auth(detail) => ApiError::AuthError(detail),
                BackendError::NotConfigured | BackendError::Db { .. } => {
                    ApiError::ServerError(message.to_string())
                }
            }
        })
    }
}
