use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::users::core::session::AuthSessionBody;
use crate::modules::users::use_cases::login::command::Login;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let body = json_body(body)?;
    let session = state
        .login_handler
        .handle(Login {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(AuthSessionBody::from(session))))
}
