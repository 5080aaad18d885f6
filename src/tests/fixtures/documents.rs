// Canonical stored documents for tests.

use crate::modules::events::core::event::{DEFAULT_EVENT_IMAGE, Event};
use crate::modules::users::core::user::User;

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new() -> Self {
        Self {
            inner: User::new(
                "user-fixed-0001".to_string(),
                "Ann".to_string(),
                "ann@x.com".to_string(),
                "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo".to_string(),
            ),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn events(mut self, v: Vec<&str>) -> Self {
        self.inner.events = v.into_iter().map(String::from).collect();
        self
    }

    pub fn friends(mut self, v: Vec<&str>) -> Self {
        self.inner.friends = v.into_iter().map(String::from).collect();
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: "event-fixed-0001".to_string(),
                title: "Run".to_string(),
                description: "Morning run in the park".to_string(),
                category: "Sport".to_string(),
                location: "Park".to_string(),
                date: "2026-11-01".to_string(),
                image: DEFAULT_EVENT_IMAGE.to_string(),
                creator_id: "user-fixed-0001".to_string(),
                potential_participants: Vec::new(),
                participants: Vec::new(),
                version: 0,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn creator_id(mut self, v: impl Into<String>) -> Self {
        self.inner.creator_id = v.into();
        self
    }

    pub fn participants(mut self, v: Vec<&str>) -> Self {
        self.inner.participants = v.into_iter().map(String::from).collect();
        self
    }

    pub fn potential_participants(mut self, v: Vec<&str>) -> Self {
        self.inner.potential_participants = v.into_iter().map(String::from).collect();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}
