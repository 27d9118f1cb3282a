pub mod gateway;
pub mod weather;

use crate::utils::error::ServiceError;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Wire shape of every non-success response in both services.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
