use async_trait::async_trait;

use crate::modules::users::core::user::User;
use crate::shared::infrastructure::document_store::StoreError;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError>;
    /// `email` is expected to be normalized already.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Unknown ids are skipped. Results follow the order of `user_ids`.
    async fn find_users_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, StoreError>;
    async fn insert_user(&self, user: User) -> Result<(), StoreError>;
    /// Replaces the stored document if its version still equals `user.version`.
    async fn update_user(&self, user: User) -> Result<User, StoreError>;
}
