use crate::modules::events::core::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// potential participant -> participant
    Accept,
    /// participant -> potential participant
    Revoke,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("The user already participates in this event.")]
    AlreadyParticipant,

    #[error("The user is not invited to this event.")]
    NotInvited,

    #[error("The user does not participate in this event.")]
    NotParticipant,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { event: Event },
    Rejected { reason: DecideError },
}
