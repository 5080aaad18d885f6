use crate::modules::events::core::event::Event;
use crate::modules::events::core::fields::{EventFields, FieldError};
use crate::modules::events::use_cases::update_event::command::UpdateEvent;

pub fn decide_update(event: &Event, command: UpdateEvent) -> Result<Event, FieldError> {
    let fields = EventFields {
        title: command.title,
        description: command.description,
        category: command.category.unwrap_or_else(|| event.category.clone()),
        location: command.location.unwrap_or_else(|| event.location.clone()),
        date: command.date,
    }
    .validated()?;

    Ok(Event {
        title: fields.title,
        description: fields.description,
        category: fields.category,
        location: fields.location,
        date: fields.date,
        ..event.clone()
    })
}
