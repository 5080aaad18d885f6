use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_event_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::move_participant::inbound::http as move_participant_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::modules::users::use_cases::add_friend::inbound::http as add_friend_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_user_http;
use crate::modules::users::use_cases::list_friends::inbound::http as list_friends_http;
use crate::modules::users::use_cases::login::inbound::http as login_http;
use crate::modules::users::use_cases::signup::inbound::http as signup_http;
use crate::shared::infrastructure::http::error_response::route_not_found;
use crate::shell::state::AppState;

fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup_http::handle))
        .route("/login", post(login_http::handle))
        .route("/{id}", get(get_user_http::handle))
        .route(
            "/{id}/friends",
            get(list_friends_http::handle).patch(add_friend_http::handle),
        )
}

// Both `/events` and `/events/` create an event.
fn events_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event_http::handle))
        .route("/events/", post(create_event_http::handle))
        .route("/events/{id}/created-events", get(list_events_http::created))
        .route("/events/{id}/participant", get(list_events_http::participating))
        .route("/events/{id}", get(list_events_http::potential))
        .route(
            "/events/event/{id}",
            get(get_event_http::handle)
                .put(move_participant_http::accept)
                .patch(move_participant_http::revoke)
                .delete(delete_event_http::handle),
        )
        .route("/events/event/{id}/edit", patch(update_event_http::handle))
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .nest("/users", users_routes())
                .merge(events_routes()),
        )
        .fallback(route_not_found)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
