use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

pub const INVALID_REVIEW_MESSAGE: &str = "Invalid review text";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to connect to sentiment analysis model";

// Taken from https://github.com/tokio-rs/axum/blob/main/examples/anyhow-error-response/src/main.rs
#[derive(Debug)]
pub struct SentiHotelError {
    pub status: StatusCode,
    pub message: HttpErrorResponse,
}

#[derive(Debug, Serialize)]
pub struct HttpErrorResponse {
    error: String,
}

impl From<&str> for HttpErrorResponse {
    fn from(message: &str) -> Self {
        HttpErrorResponse {
            error: message.to_string(),
        }
    }
}

impl SentiHotelError {
    /// The review field was missing, not a string, or empty.
    pub fn invalid_input() -> Self {
        SentiHotelError {
            status: StatusCode::BAD_REQUEST,
            message: HttpErrorResponse::from(INVALID_REVIEW_MESSAGE),
        }
    }

    /// Anything that went wrong talking to the model server. The cause is
    /// never exposed to the client.
    pub fn upstream_failure() -> Self {
        SentiHotelError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: HttpErrorResponse::from(UPSTREAM_FAILURE_MESSAGE),
        }
    }
}

impl IntoResponse for SentiHotelError {
    fn into_response(self) -> Response {
        let mut res = Json(self.message).into_response();
        *res.status_mut() = self.status;
        res
    }
}

impl<E> From<E> for SentiHotelError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        error!("[Prediction API error]: {:#}", err.into());
        SentiHotelError::upstream_failure()
    }
}

pub type HotelResult<T, E = SentiHotelError> = Result<T, E>;

/// Logs why a review was refused and returns the invalid input error.
#[macro_export]
macro_rules! reject_review {
    ($fmt:literal $(, $arg:expr)*) => {{
        ::tracing::warn!($fmt $(, $arg)*);
        return Err($crate::error::SentiHotelError::invalid_input());
    }};
}
