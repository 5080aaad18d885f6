use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::users::core::user::FriendView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListFriendsResponse {
    pub friends: Vec<FriendView>,
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
    let friends = state.users.find_users_by_ids(&user.friends).await?;
    Ok(Json(ListFriendsResponse {
        friends: friends.into_iter().map(FriendView::from).collect(),
    }))
}
