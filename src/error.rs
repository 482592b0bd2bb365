use thiserror::Error;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::response::ApiResponse;
use crate::queries::params::TemplateError;

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the sqlx library.
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// Input rejected before reaching storage: bad identifier, body, query or patch.
    #[error("{0}")]
    Validation(String),

    /// No row matched, either on read or on update.
    #[error("{0}")]
    NotFound(String),

    /// A statement template referenced a parameter that was not supplied.
    #[error("Query template error: {0}")]
    Template(#[from] TemplateError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status for this error. Not-found shares 400 with validation failures.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::NotFound(_) => StatusCode::BAD_REQUEST,
            Error::Sqlx(_) | Error::Template(_) | Error::Config(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Error::Validation(_) => "Validation failed",
            Error::NotFound(_) => "Not found",
            Error::Sqlx(_) => "Storage error",
            Error::Template(_) | Error::Internal(_) => "Internal error",
            Error::Config(_) => "Configuration error",
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::Validation(rejection.body_text())
    }
}

/// Convert custom Error to HTTP response
///
/// Every failure is rendered in the same envelope as a success, with the
/// underlying message in `data`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        ApiResponse::new(status, self.description(), self.to_string()).into_response()
    }
}
