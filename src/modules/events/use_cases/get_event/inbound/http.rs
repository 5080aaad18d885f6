use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::events::core::response::EventResponse;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let event = state
        .events
        .find_event_by_id(&event_id)
        .await?
        .ok_or_else(|| {
            ApplicationError::NotFound("Could not find an event for the provided id.".into())
        })?;
    Ok(Json(EventResponse::from(event)))
}
