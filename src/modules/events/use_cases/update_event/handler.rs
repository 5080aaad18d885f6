use std::sync::Arc;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventStore;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::modules::events::use_cases::update_event::decide::decide_update;
use crate::shared::core::errors::ApplicationError;

pub struct UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    events: Arc<TEventStore>,
}

impl<TEventStore> UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(events: Arc<TEventStore>) -> Self {
        Self { events }
    }

    #[tracing::instrument(skip_all, fields(event_id = %command.event_id))]
    pub async fn handle(&self, command: UpdateEvent) -> Result<Event, ApplicationError> {
        let event = self
            .events
            .find_event_by_id(&command.event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Could not find an event for this id.".into()))?;

        let next = decide_update(&event, command)
            .map_err(|e| ApplicationError::Validation(e.to_string()))?;
        let stored = self.events.update_event(next).await?;

        tracing::info!(version = stored.version, "event updated");
        Ok(stored)
    }
}
