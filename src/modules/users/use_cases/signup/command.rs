use crate::modules::users::core::user::{is_valid_email, normalize_email};
use crate::shared::core::errors::ApplicationError;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Signup {
    /// Trims the name, normalizes the email and checks every field.
    pub fn validated(self) -> Result<Self, ApplicationError> {
        let name = self.name.trim().to_string();
        let email = normalize_email(&self.email);
        if name.is_empty() || !is_valid_email(&email) || self.password.chars().count() < MIN_PASSWORD_LEN
        {
            return Err(ApplicationError::Validation(
                "Invalid inputs passed, please check your data.".into(),
            ));
        }
        Ok(Self {
            name,
            email,
            password: self.password,
        })
    }
}
