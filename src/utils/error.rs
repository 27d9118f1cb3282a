use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid json")]
    InvalidJson,

    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound,

    #[error("{0}")]
    Upstream(String),

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ServiceError {
    pub fn config(message: impl Into<String>) -> Self {
        ServiceError::Config {
            message: message.into(),
        }
    }

    /// HTTP status each error variant maps to. Upstream failures are never
    /// retried, they surface directly as a 500 for the current request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidJson => StatusCode::BAD_REQUEST,
            ServiceError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::ZipcodeNotFound => StatusCode::NOT_FOUND,
            ServiceError::Upstream(_) | ServiceError::Transport(_) | ServiceError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
