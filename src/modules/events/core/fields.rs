use thiserror::Error;

pub const MIN_DESCRIPTION_LEN: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("The {0} must not be empty.")]
    Empty(&'static str),

    #[error("The description needs at least {MIN_DESCRIPTION_LEN} characters.")]
    DescriptionTooShort,
}

/// Editable content of an event, checked the same way on create and on edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
}

impl EventFields {
    pub fn validated(self) -> Result<Self, FieldError> {
        let fields = Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            location: self.location.trim().to_string(),
            date: self.date.trim().to_string(),
        };
        for (name, value) in [
            ("title", &fields.title),
            ("category", &fields.category),
            ("location", &fields.location),
            ("date", &fields.date),
        ] {
            if value.is_empty() {
                return Err(FieldError::Empty(name));
            }
        }
        if fields.description.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(FieldError::DescriptionTooShort);
        }
        Ok(fields)
    }
}
