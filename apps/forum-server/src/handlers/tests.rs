use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use forum_core::ports::TokenService;
use forum_infra::{JwtConfig, JwtTokenService, StoreOptions};

use super::configure_routes;
use crate::state::{AppState, open_store};

async fn app_data() -> (web::Data<AppState>, web::Data<Arc<dyn TokenService>>) {
    let store = open_store(None, StoreOptions::default())
        .await
        .expect("in-memory store");
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
        secret: "handler-test-secret".to_string(),
        ..JwtConfig::default()
    }));

    (
        web::Data::new(AppState::with_default_hasher(&store)),
        web::Data::new(tokens),
    )
}

macro_rules! test_app {
    () => {{
        let (state, tokens) = app_data().await;
        test::init_service(
            App::new()
                .app_data(state)
                .app_data(tokens)
                .configure(configure_routes),
        )
        .await
    }};
}

fn register_request(username: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": username, "email": email, "password": "abcd" }))
}

/// Register through the API and return the new user's id and access token.
macro_rules! register {
    ($app:expr, $username:expr, $email:expr) => {{
        let resp = test::call_service(&$app, register_request($username, $email).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        (
            body["user"]["id"].as_i64().unwrap(),
            body["access_token"].as_str().unwrap().to_string(),
        )
    }};
}

#[actix_web::test]
async fn test_health_check() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_register_rejects_short_password() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "alice", "email": "a@x.io", "password": "abc" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_duplicate_email_conflicts() {
    let app = test_app!();
    register!(app, "alice", "a@x.io");

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "alice2", "email": "a@x.io", "password": "abcd" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_login() {
    let app = test_app!();
    register!(app, "alice", "a@x.io");

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": "a@x.io", "password": "abcd" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["user"].get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": "a@x.io", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_post_requires_token() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "Hello", "post_url": "https://x.io" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_post_comment_and_upvote() {
    let app = test_app!();
    let (_, alice_token) = register!(app, "alice", "a@x.io");
    let (bob_id, bob_token) = register!(app, "bob", "b@x.io");

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {}", alice_token)))
        .set_json(json!({ "title": "Hello", "post_url": "https://x.io" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Value = test::read_body_json(resp).await;
    let post_id = post["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/comments")
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .set_json(json!({ "comment_text": "Nice", "post_id": post_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::put()
        .uri("/api/posts/upvote")
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .set_json(json!({ "post_id": post_id }))
        .to_request();
    let view: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view["vote_count"], 1);
    assert_eq!(view["user"]["username"], "alice");
    assert_eq!(view["comments"][0]["comment_text"], "Nice");
    assert_eq!(view["comments"][0]["user"]["username"], "bob");

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", bob_id))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(user["voted_posts"][0]["id"], post_id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}/voters", post_id))
        .to_request();
    let voters: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(voters["voted_posts"][0]["username"], "bob");
}

#[actix_web::test]
async fn test_upvote_missing_post() {
    let app = test_app!();
    let (_, token) = register!(app, "alice", "a@x.io");

    let req = test::TestRequest::put()
        .uri("/api/posts/upvote")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "post_id": 999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_other_user_is_forbidden() {
    let app = test_app!();
    let (alice_id, _) = register!(app, "alice", "a@x.io");
    let (_, bob_token) = register!(app, "bob", "b@x.io");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", alice_id))
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .set_json(json!({ "username": "mallory" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_update_self() {
    let app = test_app!();
    let (alice_id, token) = register!(app, "alice", "a@x.io");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", alice_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "username": "alicia" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["username"], "alicia");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", alice_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_post_is_not_found() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/posts/42").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
