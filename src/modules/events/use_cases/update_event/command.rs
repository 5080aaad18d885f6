/// Edit of an event's content. Absent category or location keep their current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Option<String>,
    pub location: Option<String>,
}
