// In memory implementation of the document store and of both read ports.
//
// Purpose
// - Serve the application without an external database, for tests and small deployments.
//
// Responsibilities
// - Keep the users and events collections plus a unique index on user emails.
// - Apply transactions under one write lock, undoing applied operations when a later one fails.
// - Optionally mirror every commit into a JSON snapshot file and load it back at start.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventStore;
use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::user::User;
use crate::shared::core::primitives::{pull, push_unique};
use crate::shared::infrastructure::document_store::{
    Collection, DocumentStore, StoreError, Transaction, WriteOp,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Collections {
    users: HashMap<String, User>,
    events: HashMap<String, Event>,
    #[serde(skip)]
    emails: HashMap<String, String>,
}

enum Undo {
    RemoveUser(String),
    RestoreUser(User),
    RemoveEvent(String),
    RestoreEvent(Event),
}

impl Collections {
    fn rebuild_email_index(&mut self) {
        self.emails = self
            .users
            .values()
            .map(|u| (u.email.clone(), u.id.clone()))
            .collect();
    }

    fn put_user(&mut self, user: User) {
        if let Some(previous) = self.users.get(&user.id) {
            if previous.email != user.email {
                self.emails.remove(&previous.email);
            }
        }
        self.emails.insert(user.email.clone(), user.id.clone());
        self.users.insert(user.id.clone(), user);
    }

    fn remove_user(&mut self, user_id: &str) {
        if let Some(previous) = self.users.remove(user_id) {
            self.emails.remove(&previous.email);
        }
    }

    fn current_user(&self, user_id: &str) -> Result<User, StoreError> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::Missing {
                collection: Collection::Users,
                id: user_id.to_string(),
            })
    }

    fn current_event(&self, event_id: &str) -> Result<Event, StoreError> {
        self.events
            .get(event_id)
            .cloned()
            .ok_or_else(|| StoreError::Missing {
                collection: Collection::Events,
                id: event_id.to_string(),
            })
    }

    fn apply(&mut self, op: WriteOp) -> Result<Undo, StoreError> {
        match op {
            WriteOp::InsertUser(user) => {
                if self.users.contains_key(&user.id) {
                    return Err(StoreError::DuplicateKey {
                        key: "id",
                        value: user.id,
                    });
                }
                if self.emails.contains_key(&user.email) {
                    return Err(StoreError::DuplicateKey {
                        key: "email",
                        value: user.email,
                    });
                }
                let user_id = user.id.clone();
                self.put_user(user);
                Ok(Undo::RemoveUser(user_id))
            }
            WriteOp::ReplaceUser(mut user) => {
                let current = self.current_user(&user.id)?;
                if current.version != user.version {
                    return Err(StoreError::VersionMismatch {
                        id: user.id,
                        expected: user.version,
                        actual: current.version,
                    });
                }
                let email_owner = self.emails.get(&user.email);
                if email_owner.is_some_and(|owner| *owner != user.id) {
                    return Err(StoreError::DuplicateKey {
                        key: "email",
                        value: user.email,
                    });
                }
                user.version = current.version + 1;
                self.put_user(user);
                Ok(Undo::RestoreUser(current))
            }
            WriteOp::PushUserEvent { user_id, event_id } => {
                let current = self.current_user(&user_id)?;
                let mut next = current.clone();
                push_unique(&mut next.events, &event_id);
                next.version += 1;
                self.put_user(next);
                Ok(Undo::RestoreUser(current))
            }
            WriteOp::PullUserEvent { user_id, event_id } => {
                let current = self.current_user(&user_id)?;
                let mut next = current.clone();
                pull(&mut next.events, &event_id);
                next.version += 1;
                self.put_user(next);
                Ok(Undo::RestoreUser(current))
            }
            WriteOp::InsertEvent(event) => {
                if self.events.contains_key(&event.id) {
                    return Err(StoreError::DuplicateKey {
                        key: "id",
                        value: event.id,
                    });
                }
                let event_id = event.id.clone();
                self.events.insert(event_id.clone(), event);
                Ok(Undo::RemoveEvent(event_id))
            }
            WriteOp::ReplaceEvent(mut event) => {
                let current = self.current_event(&event.id)?;
                if current.version != event.version {
                    return Err(StoreError::VersionMismatch {
                        id: event.id,
                        expected: event.version,
                        actual: current.version,
                    });
                }
                event.version = current.version + 1;
                self.events.insert(event.id.clone(), event);
                Ok(Undo::RestoreEvent(current))
            }
            WriteOp::DeleteEvent { event_id } => {
                let current = self.current_event(&event_id)?;
                self.events.remove(&event_id);
                Ok(Undo::RestoreEvent(current))
            }
        }
    }

    fn revert(&mut self, undo: Undo) {
        match undo {
            Undo::RemoveUser(user_id) => self.remove_user(&user_id),
            Undo::RestoreUser(user) => self.put_user(user),
            Undo::RemoveEvent(event_id) => {
                self.events.remove(&event_id);
            }
            Undo::RestoreEvent(event) => {
                self.events.insert(event.id.clone(), event);
            }
        }
    }

    fn rollback(&mut self, undo_log: Vec<Undo>) {
        for undo in undo_log.into_iter().rev() {
            self.revert(undo);
        }
    }
}

#[derive(Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Collections>,
    snapshot_path: Option<PathBuf>,
    is_offline: bool,
    failing_collection: Option<Collection>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the snapshot at `path` when it exists and keeps writing to it after each commit.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut collections = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Collections>(&bytes).map_err(|e| {
                StoreError::Backend(format!("snapshot {} is unreadable: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Collections::default(),
            Err(e) => {
                return Err(StoreError::Backend(format!(
                    "snapshot {} could not be read: {e}",
                    path.display()
                )));
            }
        };
        collections.rebuild_email_index();
        tracing::info!(
            path = %path.display(),
            users = collections.users.len(),
            events = collections.events.len(),
            "document store opened"
        );
        Ok(Self {
            inner: RwLock::new(collections),
            snapshot_path: Some(path),
            ..Self::default()
        })
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Makes every write against `collection` fail, reads keep working.
    pub fn fail_writes_to(&mut self, collection: Collection) {
        self.failing_collection = Some(collection);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }

    async fn write_snapshot(&self, collections: &Collections) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(collections)
            .map_err(|e| StoreError::Backend(format!("snapshot encoding failed: {e}")))?;
        let staging = path.with_extension("tmp");
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| StoreError::Backend(format!("snapshot write failed: {e}")))?;
        tokio::fs::rename(&staging, path)
            .await
            .map_err(|e| StoreError::Backend(format!("snapshot rename failed: {e}")))?;
        Ok(())
    }

    async fn filter_events(
        &self,
        predicate: impl Fn(&Event) -> bool,
    ) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let mut events: Vec<Event> = guard
            .events
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect();
        // v7 ids sort by creation time
        events.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(events)
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn commit(&self, transaction: Transaction) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let ops = transaction.into_ops();
        let mut undo_log = Vec::with_capacity(ops.len());
        for op in ops {
            if self.failing_collection == Some(op.collection()) {
                guard.rollback(undo_log);
                return Err(StoreError::Backend(format!(
                    "{} collection rejected the write",
                    op.collection()
                )));
            }
            match guard.apply(op) {
                Ok(undo) => undo_log.push(undo),
                Err(error) => {
                    guard.rollback(undo_log);
                    return Err(error);
                }
            }
        }
        if let Err(error) = self.write_snapshot(&guard).await {
            guard.rollback(undo_log);
            return Err(error);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryDocumentStore {
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.users.get(user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .emails
            .get(email)
            .and_then(|user_id| guard.users.get(user_id))
            .cloned())
    }

    async fn find_users_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(user_ids
            .iter()
            .filter_map(|id| guard.users.get(id))
            .cloned()
            .collect())
    }

    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        self.commit(Transaction::new().with(WriteOp::InsertUser(user)))
            .await
    }

    async fn update_user(&self, user: User) -> Result<User, StoreError> {
        let user_id = user.id.clone();
        self.commit(Transaction::new().with(WriteOp::ReplaceUser(user)))
            .await?;
        self.inner
            .read()
            .await
            .current_user(&user_id)
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryDocumentStore {
    async fn find_event_by_id(&self, event_id: &str) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.events.get(event_id).cloned())
    }

    async fn find_events_by_creator(&self, creator_id: &str) -> Result<Vec<Event>, StoreError> {
        self.filter_events(|e| e.creator_id == creator_id).await
    }

    async fn find_events_by_participant(&self, user_id: &str) -> Result<Vec<Event>, StoreError> {
        self.filter_events(|e| e.is_participant(user_id)).await
    }

    async fn find_events_by_potential_participant(
        &self,
        user_id: &str,
    ) -> Result<Vec<Event>, StoreError> {
        self.filter_events(|e| e.is_potential_participant(user_id))
            .await
    }

    async fn update_event(&self, event: Event) -> Result<Event, StoreError> {
        let event_id = event.id.clone();
        self.commit(Transaction::new().with(WriteOp::ReplaceEvent(event)))
            .await?;
        self.inner.read().await.current_event(&event_id)
    }
}

#[cfg(test)]
impl InMemoryDocumentStore {
    /// Stores `event` on its own, leaving the creator's `events` untouched.
    pub async fn seed_event(&self, event: Event) {
        self.commit(Transaction::new().with(WriteOp::InsertEvent(event)))
            .await
            .unwrap();
    }
}
