use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::response::EventResponse;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Option<String>,
    pub location: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(event_id): Path<String>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let body = json_body(body)?;
    let event = state
        .update_event_handler
        .handle(UpdateEvent {
            event_id,
            title: body.title,
            description: body.description,
            date: body.date,
            category: body.category,
            location: body.location,
        })
        .await?;
    Ok(Json(EventResponse::from(event)))
}
