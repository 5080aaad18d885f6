use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::users::core::session::AuthSessionBody;
use crate::modules::users::use_cases::signup::command::Signup;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignupBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let body = json_body(body)?;
    let session = state
        .signup_handler
        .handle(Signup {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(AuthSessionBody::from(session))))
}
