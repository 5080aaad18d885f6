use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::move_participant::decision::{
    DecideError, Decision, Direction,
};
use crate::shared::core::primitives::{pull, push_unique};

/// Moves `user_id` between the two participant lists.
///
/// The user must currently sit in the source list, so repeating a move is rejected
/// instead of silently applied twice.
pub fn decide_move(event: &Event, user_id: &str, direction: Direction) -> Decision {
    let mut next = event.clone();
    match direction {
        Direction::Accept => {
            if event.is_participant(user_id) {
                return Decision::Rejected {
                    reason: DecideError::AlreadyParticipant,
                };
            }
            if !event.is_potential_participant(user_id) {
                return Decision::Rejected {
                    reason: DecideError::NotInvited,
                };
            }
            pull(&mut next.potential_participants, user_id);
            push_unique(&mut next.participants, user_id);
        }
        Direction::Revoke => {
            if !event.is_participant(user_id) {
                return Decision::Rejected {
                    reason: DecideError::NotParticipant,
                };
            }
            pull(&mut next.participants, user_id);
            push_unique(&mut next.potential_participants, user_id);
        }
    }
    Decision::Accepted { event: next }
}
