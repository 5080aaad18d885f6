use crate::modules::events::core::event::{DEFAULT_EVENT_IMAGE, Event};
use crate::modules::events::core::fields::FieldError;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::core::primitives::push_unique;

/// Builds the new event document. Participants start empty; invitations are deduplicated
/// and never include the creator.
pub fn decide_create(command: CreateEvent, event_id: String) -> Result<Event, FieldError> {
    let fields = command.fields.validated()?;
    let mut potential_participants = Vec::with_capacity(command.potential_participants.len());
    for user_id in &command.potential_participants {
        let user_id = user_id.trim();
        if !user_id.is_empty() && user_id != command.creator_id {
            push_unique(&mut potential_participants, user_id);
        }
    }
    let image = command
        .image
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_EVENT_IMAGE.to_string());

    Ok(Event {
        id: event_id,
        title: fields.title,
        description: fields.description,
        category: fields.category,
        location: fields.location,
        date: fields.date,
        image,
        creator_id: command.creator_id,
        potential_participants,
        participants: Vec::new(),
        version: 0,
    })
}
