use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::make_test_state;

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn signup_login_and_use_the_token() {
    let state: AppState = make_test_state();
    let app = router(state.clone());

    let (status, signed_up) = post_json(
        &app,
        "/api/users/signup",
        json!({ "name": "Ann", "email": "Ann@X.com ", "password": "secret1" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(signed_up["email"], "ann@x.com");
    assert_eq!(signed_up["friends"], json!([]));

    let (status, _) = post_json(
        &app,
        "/api/users/signup",
        json!({ "name": "Ann again", "email": "ann@x.com", "password": "secret2" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, logged_in) = post_json(
        &app,
        "/api/users/login",
        json!({ "email": "ann@x.com", "password": "secret1" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(logged_in["userId"], signed_up["userId"]);
    let token = logged_in["token"].as_str().unwrap();
    let claims = state.tokens.verify(token).unwrap();
    assert_eq!(claims.user_id, signed_up["userId"].as_str().unwrap());

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/api/users/{}/friends", claims.user_id))
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_failures_look_the_same() {
    let app = router(make_test_state());
    post_json(
        &app,
        "/api/users/signup",
        json!({ "name": "Ann", "email": "ann@x.com", "password": "secret1" }),
    )
    .await;

    let (wrong_status, wrong_password) = post_json(
        &app,
        "/api/users/login",
        json!({ "email": "ann@x.com", "password": "nope-nope" }),
    )
    .await;
    let (unknown_status, unknown_email) = post_json(
        &app,
        "/api/users/login",
        json!({ "email": "bob@x.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn protected_routes_reject_a_forged_token() {
    let app = router(make_test_state());

    let response = app
        .oneshot(
            Request::get("/api/events/event/any")
                .header("authorization", "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
