use std::sync::Arc;

use axum::extract::FromRef;

use crate::modules::events::core::ports::EventStore;
use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::move_participant::handler::MoveParticipantHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use crate::modules::users::core::ports::UserStore;
use crate::modules::users::use_cases::add_friend::handler::AddFriendHandler;
use crate::modules::users::use_cases::login::handler::LoginHandler;
use crate::modules::users::use_cases::signup::handler::SignupHandler;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::security::password::PasswordHasher;
use crate::shared::infrastructure::security::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub events: Arc<dyn EventStore>,
    pub tokens: Arc<TokenService>,
    pub signup_handler: Arc<SignupHandler<InMemoryDocumentStore>>,
    pub login_handler: Arc<LoginHandler<InMemoryDocumentStore>>,
    pub add_friend_handler: Arc<AddFriendHandler<InMemoryDocumentStore>>,
    pub create_event_handler: Arc<CreateEventHandler<InMemoryDocumentStore>>,
    pub delete_event_handler: Arc<DeleteEventHandler<InMemoryDocumentStore>>,
    pub update_event_handler: Arc<UpdateEventHandler<InMemoryDocumentStore>>,
    pub move_participant_handler: Arc<MoveParticipantHandler<InMemoryDocumentStore>>,
}

impl AppState {
    /// Wires every handler against the one shared store.
    pub fn new(
        store: Arc<InMemoryDocumentStore>,
        tokens: TokenService,
        hasher: PasswordHasher,
    ) -> Self {
        let tokens = Arc::new(tokens);
        Self {
            users: store.clone(),
            events: store.clone(),
            tokens: tokens.clone(),
            signup_handler: Arc::new(SignupHandler::new(
                store.clone(),
                tokens.clone(),
                hasher.clone(),
            )),
            login_handler: Arc::new(LoginHandler::new(store.clone(), tokens, hasher)),
            add_friend_handler: Arc::new(AddFriendHandler::new(store.clone())),
            create_event_handler: Arc::new(CreateEventHandler::new(store.clone())),
            delete_event_handler: Arc::new(DeleteEventHandler::new(store.clone())),
            update_event_handler: Arc::new(UpdateEventHandler::new(store.clone())),
            move_participant_handler: Arc::new(MoveParticipantHandler::new(store)),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
