use crate::modules::users::core::user::User;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("You cannot add yourself as a friend.")]
    SelfFriendship,

    #[error("This user is already in your friends list.")]
    AlreadyFriends,
}

/// Returns `user` with `friend` appended to its friends list.
///
/// Friends are matched by email, which the unique index ties to a single id.
pub fn decide_add_friend(user: &User, friend: &User) -> Result<User, DecideError> {
    if user.email == friend.email {
        return Err(DecideError::SelfFriendship);
    }
    if user.friends.iter().any(|id| *id == friend.id) {
        return Err(DecideError::AlreadyFriends);
    }
    let mut next = user.clone();
    next.friends.push(friend.id.clone());
    Ok(next)
}
