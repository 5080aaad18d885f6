use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::fields::EventFields;
use crate::modules::events::core::response::EventResponse;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shared::infrastructure::http::json_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub image: Option<String>,
    /// Defaults to the authenticated caller.
    pub creator_id: Option<String>,
    #[serde(default)]
    pub potential_participants: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let body = json_body(body)?;
    let command = CreateEvent {
        fields: EventFields {
            title: body.title,
            description: body.description,
            category: body.category,
            location: body.location,
            date: body.date,
        },
        image: body.image,
        creator_id: body.creator_id.unwrap_or(caller.user_id),
        potential_participants: body.potential_participants,
    };
    let event = state.create_event_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}
