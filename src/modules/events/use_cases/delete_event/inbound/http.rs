use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http::auth::AuthenticatedUser;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub message: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: AuthenticatedUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    state.delete_event_handler.handle(&event_id).await?;
    Ok(Json(DeleteEventResponse {
        message: "Deleted event.",
    }))
}

#[cfg(test)]
mod delete_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{create_event, make_test_state, sign_up};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/event/{id}", delete(handle))
            .with_state(state)
    }

    fn delete_request(event_id: &str, token: &str) -> Request<Body> {
        Request::delete(format!("/events/event/{event_id}"))
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_delete_the_event_and_unlink_the_creator() {
        let state = make_test_state();
        let (ann, token) = sign_up(&state, "Ann", "ann@x.com").await;
        let event = create_event(&state, &ann.id, vec![]).await;

        let response = app(state.clone())
            .oneshot(delete_request(&event.id, &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Deleted event.");
        assert!(state.events.find_event_by_id(&event.id).await.unwrap().is_none());
        let creator = state.users.find_user_by_id(&ann.id).await.unwrap().unwrap();
        assert!(creator.events.is_empty());
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_event() {
        let state = make_test_state();
        let (_, token) = sign_up(&state, "Ann", "ann@x.com").await;

        let response = app(state).oneshot(delete_request("missing", &token)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
