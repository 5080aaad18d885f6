use std::sync::Arc;

use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::session::AuthSession;
use crate::modules::users::core::user::normalize_email;
use crate::modules::users::use_cases::login::command::Login;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::security::password::PasswordHasher;
use crate::shared::infrastructure::security::token::TokenService;

/// Same message for an unknown email and a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials, could not log you in.";

pub struct LoginHandler<TUserStore>
where
    TUserStore: UserStore + 'static,
{
    users: Arc<TUserStore>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl<TUserStore> LoginHandler<TUserStore>
where
    TUserStore: UserStore + 'static,
{
    pub fn new(users: Arc<TUserStore>, tokens: Arc<TokenService>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn handle(&self, command: Login) -> Result<AuthSession, ApplicationError> {
        let email = normalize_email(&command.email);

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            tracing::warn!("login rejected");
            return Err(ApplicationError::Unauthorized(INVALID_CREDENTIALS.into()));
        };

        let is_valid = self
            .hasher
            .verify(&command.password, &user.password_hash)
            .await
            .map_err(|e| ApplicationError::Unexpected(format!("user {}: {e}", user.id)))?;
        if !is_valid {
            tracing::warn!("login rejected");
            return Err(ApplicationError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let token = self
            .tokens
            .issue(&user)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(AuthSession { user, token })
    }
}
