use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Envelope shared by every response, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub description: String,
    pub status_code: u16,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, description: impl Into<String>, data: T) -> Self {
        Self {
            description: description.into(),
            status_code: status.as_u16(),
            data,
        }
    }

    pub fn ok(description: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, description, data)
    }

    pub fn created(description: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, description, data)
    }

    pub fn accepted(description: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::ACCEPTED, description, data)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
