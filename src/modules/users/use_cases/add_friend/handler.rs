use std::sync::Arc;

use crate::modules::users::core::ports::UserStore;
use crate::modules::users::core::user::{User, normalize_email};
use crate::modules::users::use_cases::add_friend::decide::{DecideError, decide_add_friend};
use crate::shared::core::errors::ApplicationError;

pub struct AddFriendHandler<TUserStore>
where
    TUserStore: UserStore + 'static,
{
    users: Arc<TUserStore>,
}

impl<TUserStore> AddFriendHandler<TUserStore>
where
    TUserStore: UserStore + 'static,
{
    pub fn new(users: Arc<TUserStore>) -> Self {
        Self { users }
    }

    #[tracing::instrument(skip(self, friend_email))]
    pub async fn handle(&self, user_id: &str, friend_email: &str) -> Result<User, ApplicationError> {
        let user = self.users.find_user_by_id(user_id).await?.ok_or_else(|| {
            ApplicationError::NotFound("Could not find a user for the provided id.".into())
        })?;
        let friend = self
            .users
            .find_user_by_email(&normalize_email(friend_email))
            .await?
            .ok_or_else(|| {
                ApplicationError::NotFound("Could not find a user with this email.".into())
            })?;

        let next = decide_add_friend(&user, &friend).map_err(|reason| {
            let error = match reason {
                DecideError::SelfFriendship => ApplicationError::Validation(reason.to_string()),
                DecideError::AlreadyFriends => ApplicationError::Conflict(reason.to_string()),
            };
            tracing::warn!(%error, "friend not added");
            error
        })?;

        let stored = self.users.update_user(next).await?;
        tracing::info!(friend_id = %friend.id, "friend added");
        Ok(stored)
    }
}
