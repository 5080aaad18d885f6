// Application-level fixtures: a fully wired state and shortcuts through real handlers.

use std::sync::Arc;

use crate::modules::events::core::event::Event;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::signup::command::Signup;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::security::password::PasswordHasher;
use crate::shared::infrastructure::security::token::TokenService;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::CreateEventBuilder;

pub const TEST_PASSWORD: &str = "secret1";

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        TokenService::new("test-secret"),
        PasswordHasher::new(8, 1),
    )
}

/// Signs a user up with `TEST_PASSWORD` and returns the stored user with its token.
pub async fn sign_up(state: &AppState, name: &str, email: &str) -> (User, String) {
    let session = state
        .signup_handler
        .handle(Signup {
            name: name.to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap();
    (session.user, session.token)
}

pub async fn create_event(
    state: &AppState,
    creator_id: &str,
    potential_participants: Vec<String>,
) -> Event {
    state
        .create_event_handler
        .handle(
            CreateEventBuilder::new()
                .creator_id(creator_id)
                .potential_participants(potential_participants)
                .build(),
        )
        .await
        .unwrap()
}
