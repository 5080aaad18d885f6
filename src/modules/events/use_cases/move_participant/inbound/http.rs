use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::response::EventResponse;
use crate::modules::events::use_cases::move_participant::decision::Direction;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveParticipantBody {
    pub user_id: String,
}

async fn move_participant(
    state: AppState,
    event_id: String,
    body: Result<Json<MoveParticipantBody>, JsonRejection>,
    direction: Direction,
) -> Result<Json<EventResponse>, ApplicationError> {
    let body = json_body(body)?;
    let event = state
        .move_participant_handler
        .handle(&event_id, &body.user_id, direction)
        .await?;
    Ok(Json(EventResponse::from(event)))
}

pub async fn accept(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(event_id): Path<String>,
    body: Result<Json<MoveParticipantBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    move_participant(state, event_id, body, Direction::Accept).await
}

pub async fn revoke(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(event_id): Path<String>,
    body: Result<Json<MoveParticipantBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    move_participant(state, event_id, body, Direction::Revoke).await
}
