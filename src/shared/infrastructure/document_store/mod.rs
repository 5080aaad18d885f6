// Storage client handle shared by the users and events modules.
//
// Purpose
// - Describe the write primitive both collections go through: a transaction made of
//   write operations that is committed all-or-nothing.
//
// Boundaries
// - Read ports live with their module (UserStore, EventStore). This module only knows
//   how documents are written.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::Event;
use crate::modules::users::core::user::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate key on {key}: {value}")]
    DuplicateKey { key: &'static str, value: String },

    #[error("{collection} document not found: {id}")]
    Missing { collection: Collection, id: String },

    #[error("version mismatch on {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Events,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Users => f.write_str("users"),
            Collection::Events => f.write_str("events"),
        }
    }
}

/// A single document write.
///
/// Replace operations carry the version that was read; the store rejects them when the
/// stored version moved on and bumps the version when they apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    InsertUser(User),
    ReplaceUser(User),
    PushUserEvent { user_id: String, event_id: String },
    PullUserEvent { user_id: String, event_id: String },
    InsertEvent(Event),
    ReplaceEvent(Event),
    DeleteEvent { event_id: String },
}

impl WriteOp {
    pub fn collection(&self) -> Collection {
        match self {
            WriteOp::InsertUser(_)
            | WriteOp::ReplaceUser(_)
            | WriteOp::PushUserEvent { .. }
            | WriteOp::PullUserEvent { .. } => Collection::Users,
            WriteOp::InsertEvent(_) | WriteOp::ReplaceEvent(_) | WriteOp::DeleteEvent { .. } => {
                Collection::Events
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    ops: Vec<WriteOp>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, op: WriteOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Applies every operation or none of them. Readers never observe a partial commit.
    async fn commit(&self, transaction: Transaction) -> Result<(), StoreError>;
}
