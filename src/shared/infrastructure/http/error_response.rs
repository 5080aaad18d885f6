use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::document_store::StoreError;

pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred!";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) | ApplicationError::Conflict(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApplicationError::Store(StoreError::DuplicateKey { .. })
            | ApplicationError::Store(StoreError::VersionMismatch { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::Store(StoreError::Missing { .. }) => StatusCode::NOT_FOUND,
            ApplicationError::Store(StoreError::Backend(_)) | ApplicationError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApplicationError::Store(StoreError::DuplicateKey { key, .. }) => {
                format!("A document with this {key} already exists.")
            }
            ApplicationError::Store(StoreError::VersionMismatch { .. }) => {
                "The document was changed by another request, reload it and try again.".into()
            }
            e if e.is_internal() => GENERIC_ERROR_MESSAGE.into(),
            e => e.to_string(),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_internal() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            message: self.public_message(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn route_not_found() -> ApplicationError {
    ApplicationError::NotFound("Could not find this route.".into())
}
