use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::users::core::user::UserView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddFriendBody {
    pub email: String,
}

#[derive(Serialize)]
pub struct AddFriendResponse {
    pub user: UserView,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(user_id): Path<String>,
    body: Result<Json<AddFriendBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let body = json_body(body)?;
    let user = state.add_friend_handler.handle(&user_id, &body.email).await?;
    Ok(Json(AddFriendResponse { user: user.into() }))
}
