use std::sync::Arc;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventStore;
use crate::modules::events::use_cases::move_participant::decide::decide_move;
use crate::modules::events::use_cases::move_participant::decision::{Decision, Direction};
use crate::shared::core::errors::ApplicationError;

pub struct MoveParticipantHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    events: Arc<TEventStore>,
}

impl<TEventStore> MoveParticipantHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(events: Arc<TEventStore>) -> Self {
        Self { events }
    }

    /// Single-document update guarded by the version read here; a concurrent change
    /// fails the write instead of being overwritten.
    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        event_id: &str,
        user_id: &str,
        direction: Direction,
    ) -> Result<Event, ApplicationError> {
        let event = self
            .events
            .find_event_by_id(event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound("Could not find an event for this id.".into()))?;

        match decide_move(&event, user_id, direction) {
            Decision::Accepted { event } => {
                let stored = self.events.update_event(event).await?;
                tracing::info!("participant moved");
                Ok(stored)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "participant not moved");
                Err(ApplicationError::Conflict(reason.to_string()))
            }
        }
    }
}
