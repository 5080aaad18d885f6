use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::users::core::user::UserView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GetUserResponse {
    pub user: UserView,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let user = state
        .users
        .find_user_by_id(&user_id)
        .await?
        .ok_or_else(|| ApplicationError::NotFound("Could not find a user for the provided id.".into()))?;
    Ok(Json(GetUserResponse { user: user.into() }))
}
