use serde::Serialize;

use crate::modules::events::core::event::Event;

/// Public shape of an event. The storage version stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
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
}

impl From<Event> for EventView {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            category: event.category,
            location: event.location,
            date: event.date,
            image: event.image,
            creator_id: event.creator_id,
            potential_participants: event.potential_participants,
            participants: event.participants,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event: EventView,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event: event.into(),
        }
    }
}

/// Converts stored events for a list response, keeping their order.
pub fn views(events: Vec<Event>) -> Vec<EventView> {
    events.into_iter().map(EventView::from).collect()
}
