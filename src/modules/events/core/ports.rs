use async_trait::async_trait;

use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::document_store::StoreError;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_event_by_id(&self, event_id: &str) -> Result<Option<Event>, StoreError>;
    async fn find_events_by_creator(&self, creator_id: &str) -> Result<Vec<Event>, StoreError>;
    async fn find_events_by_participant(&self, user_id: &str) -> Result<Vec<Event>, StoreError>;
    async fn find_events_by_potential_participant(
        &self,
        user_id: &str,
    ) -> Result<Vec<Event>, StoreError>;
    /// Replaces the stored document if its version still equals `event.version`.
    async fn update_event(&self, event: Event) -> Result<Event, StoreError>;
}
