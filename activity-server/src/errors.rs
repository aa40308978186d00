use std::fmt::{Display, Formatter};

use activity_core::DirectoryError;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Failures that stop the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address {address}: {source}")]
    InvalidBindAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    UnprocessableEntity(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::UnprocessableEntity(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::NotFound(message)
            | ApiError::BadRequest(message)
            | ApiError::UnprocessableEntity(message) => message,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(message) => write!(f, "Status=404, NotFound: {}", message),
            ApiError::BadRequest(message) => write!(f, "Status=400, BadRequest: {}", message),
            ApiError::UnprocessableEntity(message) => {
                write!(f, "Status=422, UnprocessableEntity: {}", message)
            }
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::NotFound(_) => ApiError::not_found("Activity not found"),
            DirectoryError::AlreadyRegistered { .. } => {
                ApiError::bad_request("Student is already signed up")
            }
            DirectoryError::CapacityExceeded { .. } => ApiError::bad_request("Activity is full"),
            DirectoryError::NotRegistered { .. } => {
                ApiError::bad_request("Student is not registered for this activity")
            }
            DirectoryError::InvalidActivity(message) => ApiError::bad_request(message),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::unprocessable(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("{}", self);

        let status = self.status();
        let detail = match self {
            ApiError::NotFound(message)
            | ApiError::BadRequest(message)
            | ApiError::UnprocessableEntity(message) => message,
        };

        (status, axum::Json(ErrorResponse { detail })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_errors_map_to_status() {
        let cases = [
            (DirectoryError::NotFound("X".into()), StatusCode::NOT_FOUND, "not found"),
            (
                DirectoryError::AlreadyRegistered {
                    activity: "X".into(),
                    email: "a@b".into(),
                },
                StatusCode::BAD_REQUEST,
                "already signed up",
            ),
            (
                DirectoryError::CapacityExceeded {
                    activity: "X".into(),
                    max_participants: 1,
                },
                StatusCode::BAD_REQUEST,
                "full",
            ),
            (
                DirectoryError::NotRegistered {
                    activity: "X".into(),
                    email: "a@b".into(),
                },
                StatusCode::BAD_REQUEST,
                "not registered",
            ),
        ];

        for (error, status, fragment) in cases {
            let api = ApiError::from(error);
            assert_eq!(api.status(), status);
            assert!(api.detail().contains(fragment), "{} lacks {}", api, fragment);
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("Activity not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::unprocessable("missing field `email`").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
