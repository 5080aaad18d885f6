pub mod auth;
pub mod error_response;

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::shared::core::errors::ApplicationError;

/// Unwraps a JSON body, turning a rejection into a validation failure.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApplicationError> {
    body.map(|Json(inner)| inner).map_err(|rejection| {
        ApplicationError::Validation(format!(
            "Invalid inputs passed, please check your data: {}",
            rejection.body_text()
        ))
    })
}
