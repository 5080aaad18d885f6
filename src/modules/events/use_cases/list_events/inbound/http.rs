use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::core::response::{EventView, views};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreatedEventsResponse {
    pub events: Vec<EventView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipateEventsResponse {
    pub participate_events: Vec<EventView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialEventsResponse {
    pub potential_events: Vec<EventView>,
}

pub async fn created(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let events = state.events.find_events_by_creator(&user_id).await?;
    Ok(Json(CreatedEventsResponse {
        events: views(events),
    }))
}

pub async fn participating(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let participate_events = state.events.find_events_by_participant(&user_id).await?;
    Ok(Json(ParticipateEventsResponse {
        participate_events: views(participate_events),
    }))
}

pub async fn potential(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let potential_events = state
        .events
        .find_events_by_potential_participant(&user_id)
        .await?;
    Ok(Json(PotentialEventsResponse {
        potential_events: views(potential_events),
    }))
}
