use std::sync::Arc;

use crate::modules::events::core::ports::EventStore;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::document_store::{
    Collection, DocumentStore, StoreError, Transaction, WriteOp,
};

const EVENT_NOT_FOUND: &str = "Could not find an event for this id.";

/// Deletes the event and pulls its id from the creator's `events` in one transaction.
pub struct DeleteEventHandler<TStore>
where
    TStore: EventStore + DocumentStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteEventHandler<TStore>
where
    TStore: EventStore + DocumentStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, event_id: &str) -> Result<(), ApplicationError> {
        let event = self
            .store
            .find_event_by_id(event_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(EVENT_NOT_FOUND.into()))?;

        let transaction = Transaction::new()
            .with(WriteOp::DeleteEvent {
                event_id: event.id.clone(),
            })
            .with(WriteOp::PullUserEvent {
                user_id: event.creator_id.clone(),
                event_id: event.id.clone(),
            });
        self.store
            .commit(transaction)
            .await
            .map_err(|error| match error {
                // deleted by a concurrent request since the read
                StoreError::Missing {
                    collection: Collection::Events,
                    ..
                } => ApplicationError::NotFound(EVENT_NOT_FOUND.into()),
                other => other.into(),
            })?;

        tracing::info!(creator_id = %event.creator_id, "event deleted");
        Ok(())
    }
}
