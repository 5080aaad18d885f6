use serde::Serialize;

use crate::modules::users::core::user::User;

/// Outcome of a successful signup or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSessionBody {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub friends: Vec<String>,
    pub token: String,
}

impl From<AuthSession> for AuthSessionBody {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user.id,
            email: session.user.email,
            name: session.user.name,
            friends: session.user.friends,
            token: session.token,
        }
    }
}
