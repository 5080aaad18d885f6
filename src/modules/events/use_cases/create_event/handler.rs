use std::sync::Arc;

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::events::use_cases::create_event::decide::decide_create;
use crate::modules::users::core::ports::UserStore;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::new_document_id;
use crate::shared::infrastructure::document_store::{
    Collection, DocumentStore, StoreError, Transaction, WriteOp,
};

const CREATOR_NOT_FOUND: &str = "Could not find a user for the provided creator id.";

/// Inserts the event and appends its id to the creator's `events` in one transaction.
pub struct CreateEventHandler<TStore>
where
    TStore: UserStore + DocumentStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateEventHandler<TStore>
where
    TStore: UserStore + DocumentStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip_all, fields(creator_id = %command.creator_id))]
    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let event = decide_create(command, new_document_id())
            .map_err(|e| ApplicationError::Validation(e.to_string()))?;

        if self
            .store
            .find_user_by_id(&event.creator_id)
            .await?
            .is_none()
        {
            tracing::warn!("event not created, creator does not exist");
            return Err(ApplicationError::NotFound(CREATOR_NOT_FOUND.into()));
        }

        let transaction = Transaction::new()
            .with(WriteOp::InsertEvent(event.clone()))
            .with(WriteOp::PushUserEvent {
                user_id: event.creator_id.clone(),
                event_id: event.id.clone(),
            });
        self.store
            .commit(transaction)
            .await
            .map_err(|error| match error {
                StoreError::Missing {
                    collection: Collection::Users,
                    ..
                } => ApplicationError::NotFound(CREATOR_NOT_FOUND.into()),
                other => other.into(),
            })?;

        tracing::info!(event_id = %event.id, "event created");
        Ok(event)
    }
}
