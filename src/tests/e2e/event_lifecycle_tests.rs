use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app::make_test_state;

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn signup(app: &Router, name: &str, email: &str) -> (String, String) {
    let (status, body) = call(
        app,
        "POST",
        "/api/users/signup",
        None,
        Some(json!({ "name": name, "email": email, "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (
        body["userId"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn create_then_delete_keeps_the_creator_in_sync() {
    let app = router(make_test_state());
    let (ann_id, token) = signup(&app, "Ann", "ann@x.com").await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/events",
        Some(&token),
        Some(json!({
            "title": "Run",
            "description": "Morning run in the park",
            "category": "Sport",
            "location": "Park",
            "date": "2026-11-01",
            "creatorId": ann_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let event_id = body["event"]["id"].as_str().unwrap().to_string();

    let (_, body) = call(&app, "GET", &format!("/api/users/{ann_id}"), Some(&token), None).await;
    assert_eq!(body["user"]["events"], json!([event_id.clone()]));
    assert!(body["user"].get("passwordHash").is_none());

    let (status, body) = call(
        &app,
        "GET",
        &format!("/api/events/{ann_id}/created-events"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"][0]["id"], event_id.as_str());

    let uri = format!("/api/events/event/{event_id}");
    let (status, body) = call(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted event.");

    let (_, body) = call(&app, "GET", &format!("/api/users/{ann_id}"), Some(&token), None).await;
    assert_eq!(body["user"]["events"], json!([]));
    let (status, _) = call(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_for_a_missing_creator_persists_nothing() {
    let app = router(make_test_state());
    let (_, token) = signup(&app, "Ann", "ann@x.com").await;

    let (status, body) = call(
        &app,
        "POST",
        "/api/events",
        Some(&token),
        Some(json!({
            "title": "Run",
            "description": "Morning run in the park",
            "category": "Sport",
            "location": "Park",
            "date": "2026-11-01",
            "creatorId": "missing",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let (_, body) = call(
        &app,
        "GET",
        "/api/events/missing/created-events",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["events"], json!([]));
}

#[tokio::test]
async fn invitee_moves_between_potential_and_confirmed() {
    let app = router(make_test_state());
    let (ann_id, token) = signup(&app, "Ann", "ann@x.com").await;
    let (bob_id, bob_token) = signup(&app, "Bob", "bob@x.com").await;

    let (_, body) = call(
        &app,
        "POST",
        "/api/events",
        Some(&token),
        Some(json!({
            "title": "Run",
            "description": "Morning run in the park",
            "category": "Sport",
            "location": "Park",
            "date": "2026-11-01",
            "creatorId": ann_id,
            "potentialParticipants": [bob_id],
        })),
    )
    .await;
    let event_id = body["event"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/events/event/{event_id}");

    let (_, body) = call(&app, "GET", &format!("/api/events/{bob_id}"), Some(&bob_token), None).await;
    assert_eq!(body["potentialEvents"][0]["id"], event_id.as_str());

    let (status, _) = call(&app, "PUT", &uri, Some(&bob_token), Some(json!({ "userId": bob_id }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) =
        call(&app, "PUT", &uri, Some(&bob_token), Some(json!({ "userId": bob_id }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);

    let (_, body) = call(
        &app,
        "GET",
        &format!("/api/events/{bob_id}/participant"),
        Some(&bob_token),
        None,
    )
    .await;
    assert_eq!(body["participateEvents"][0]["id"], event_id.as_str());

    let (status, body) =
        call(&app, "PATCH", &uri, Some(&bob_token), Some(json!({ "userId": bob_id }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["participants"], json!([]));
    assert_eq!(body["event"]["potentialParticipants"], json!([bob_id]));

    let (status, body) = call(
        &app,
        "PATCH",
        &format!("{uri}/edit"),
        Some(&token),
        Some(json!({
            "title": "Long run",
            "description": "Ten kilometres along the river",
            "date": "2026-11-02",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["title"], "Long run");
    assert_eq!(body["event"]["category"], "Sport");
}
