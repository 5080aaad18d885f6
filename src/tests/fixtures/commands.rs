// Shared test fixture for the CreateEvent command.
// Field values come from json/create_event.json, the creator is fixed.

use serde::Deserialize;
use std::fs;

use crate::modules::events::core::fields::EventFields;
use crate::modules::events::use_cases::create_event::command::CreateEvent;

#[derive(Debug, Clone, Deserialize)]
pub struct EventFieldsDto {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
}

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/fixtures/json/create_event.json");
        let json_str = fs::read_to_string(path).unwrap();
        let dto: EventFieldsDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateEvent {
                fields: EventFields {
                    title: dto.title,
                    description: dto.description,
                    category: dto.category,
                    location: dto.location,
                    date: dto.date,
                },
                image: None,
                creator_id: "user-fixed-0001".to_string(),
                potential_participants: Vec::new(),
            },
        }
    }

    pub fn creator_id(mut self, v: impl Into<String>) -> Self {
        self.inner.creator_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.fields.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.fields.description = v.into();
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = Some(v.into());
        self
    }

    pub fn potential_participants<S: Into<String>>(mut self, v: Vec<S>) -> Self {
        self.inner.potential_participants = v.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}
