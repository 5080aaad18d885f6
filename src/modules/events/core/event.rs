use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_IMAGE: &str = "https://picsum.photos/200/300/?blur=2";

/// Event document as stored.
///
/// `participants` and `potential_participants` never share an entry once a
/// participant move has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub image: String,
    pub creator_id: String,
    pub potential_participants: Vec<String>,
    pub participants: Vec<String>,
    pub version: u64,
}

impl Event {
    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    pub fn is_potential_participant(&self, user_id: &str) -> bool {
        self.potential_participants.iter().any(|p| p == user_id)
    }
}
