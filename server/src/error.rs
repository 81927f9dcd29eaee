use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ratebridge_fx::FxError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Fx(#[from] FxError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Fx(e) if e.is_upstream() => StatusCode::BAD_GATEWAY,
            ApiError::Fx(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Upstream details stay in the logs.
        let message = match &self {
            ApiError::Fx(e) if e.is_upstream() => "failed to fetch rates".to_string(),
            ApiError::Fx(e) => e.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
