use std::sync::Arc;

use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::session::AuthSession;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::signup::command::Signup;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::new_document_id;
use crate::shared::infrastructure::document_store::StoreError;
use crate::shared::infrastructure::security::password::PasswordHasher;
use crate::shared::infrastructure::security::token::TokenService;

const USER_EXISTS: &str = "User exists already, please login instead.";

pub struct SignupHandler<TUserStore>
where
    TUserStore: UserStore + 'static,
{
    users: Arc<TUserStore>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl<TUserStore> SignupHandler<TUserStore>
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
    pub async fn handle(&self, command: Signup) -> Result<AuthSession, ApplicationError> {
        let command = command.validated()?;

        if self.users.find_user_by_email(&command.email).await?.is_some() {
            tracing::warn!("signup rejected, email already registered");
            return Err(ApplicationError::Conflict(USER_EXISTS.into()));
        }

        let password_hash = self
            .hasher
            .hash(&command.password)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        let user = User::new(new_document_id(), command.name, command.email, password_hash);

        // the unique index still catches a concurrent signup with the same email
        self.users
            .insert_user(user.clone())
            .await
            .map_err(|error| match error {
                StoreError::DuplicateKey { key: "email", .. } => {
                    ApplicationError::Conflict(USER_EXISTS.into())
                }
                other => other.into(),
            })?;

        let token = self
            .tokens
            .issue(&user)
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(AuthSession { user, token })
    }
}
