use crate::modules::events::core::fields::EventFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub fields: EventFields,
    pub image: Option<String>,
    pub creator_id: String,
    pub potential_participants: Vec<String>,
}
