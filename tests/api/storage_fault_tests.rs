//! Storage Fault Tests
//!
//! Exercises the API over a user store that fails on demand.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use mockall::mock;
use serde_json::json;

use sup_server::domain::{StoreError, User, UserRepository};
use sup_server::infrastructure::repositories::InMemoryMessageRepository;
use sup_server::startup::AppState;

use crate::common::*;

mock! {
    pub UserStore {}

    #[async_trait]
    impl UserRepository for UserStore {
        async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
        async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, StoreError>;
        async fn find_all(&self) -> Result<Vec<User>, StoreError>;
        async fn create(&self, user: &User) -> Result<User, StoreError>;
        async fn upsert(&self, user: &User) -> Result<(), StoreError>;
        async fn delete(&self, id: &str) -> Result<bool, StoreError>;
        async fn ping(&self) -> Result<(), StoreError>;
    }
}

fn outage() -> StoreError {
    StoreError::Backend("connection reset by peer".into())
}

fn app_over(store: MockUserStore) -> TestApp {
    TestApp::with_state(AppState::from_repositories(
        Arc::new(store),
        Arc::new(InMemoryMessageRepository::new()),
    ))
}

#[tokio::test]
async fn test_list_users_store_failure_is_internal_error() {
    let mut store = MockUserStore::new();
    store.expect_find_all().returning(|| Err(outage()));
    let app = app_over(store);

    let response = app.server.get("/users").expect_failure().await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
}

#[tokio::test]
async fn test_create_user_store_failure_is_internal_error() {
    let mut store = MockUserStore::new();
    store.expect_create().returning(|_| Err(outage()));
    let app = app_over(store);

    let response = app
        .server
        .post("/users")
        .json(&json!({ "username": "alice" }))
        .expect_failure()
        .await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
}

#[tokio::test]
async fn test_store_conflict_on_create_is_reported_as_taken_username() {
    let mut store = MockUserStore::new();
    store
        .expect_create()
        .returning(|_| Err(StoreError::Conflict("users_username_key".into())));
    let app = app_over(store);

    let response = app
        .server
        .post("/users")
        .json(&json!({ "username": "alice" }))
        .expect_failure()
        .await;

    assert_error(&response, StatusCode::CONFLICT, "Username already taken");
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_the_store() {
    let mut store = MockUserStore::new();
    store.expect_create().never();
    store.expect_upsert().never();
    let app = app_over(store);

    let response = app
        .server
        .put(&format!("/users/{}", ALICE.id))
        .json(&json!({ "username": 42 }))
        .expect_failure()
        .await;

    assert_error(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Incorrect field type: username",
    );
}

#[tokio::test]
async fn test_message_create_store_failure_during_lookup_is_internal_error() {
    let mut store = MockUserStore::new();
    store.expect_find_by_id().returning(|_| Err(outage()));
    let app = app_over(store);

    let response = app
        .server
        .post("/messages")
        .json(&json!({ "from": ALICE.id, "to": BOB.id, "text": "Hi Bob" }))
        .expect_failure()
        .await;

    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    app.server.get("/messages").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_message_create_checks_sender_before_recipient() {
    let mut store = MockUserStore::new();
    store
        .expect_find_by_id()
        .times(1)
        .returning(|id| {
            assert_eq!(id.to_string(), ALICE.id);
            Ok(None)
        });
    let app = app_over(store);

    let response = app
        .server
        .post("/messages")
        .json(&json!({ "from": ALICE.id, "to": BOB.id, "text": "Hi Bob" }))
        .expect_failure()
        .await;

    assert_error(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Incorrect field value: from",
    );
}

#[tokio::test]
async fn test_readiness_reports_unreachable_store() {
    let mut store = MockUserStore::new();
    store.expect_ping().returning(|| Err(outage()));
    let app = app_over(store);

    let response = app.server.get("/health/ready").expect_failure().await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["store"]["message"], "Store unreachable");
}

#[tokio::test]
async fn test_message_listing_resolves_users_in_one_store_call() {
    let mut store = MockUserStore::new();
    store
        .expect_find_by_id()
        .returning(|id| Ok(Some(User::new(id, format!("user-{}", &id[..1])))));
    store
        .expect_find_by_ids()
        .times(1)
        .returning(|ids| {
            let mut ids = ids.to_vec();
            ids.sort();
            assert_eq!(ids, vec![ALICE.id, BOB.id, CHUCK.id]);
            Ok(ids
                .iter()
                .map(|id| User::new(id.clone(), format!("user-{}", &id[..1])))
                .collect())
        });
    let app = app_over(store);
    app.send(&ALICE, &BOB, "A").await;
    app.send(&ALICE, &CHUCK, "B").await;
    app.send(&BOB, &CHUCK, "C").await;

    let messages: Vec<serde_json::Value> = app.server.get("/messages").await.json();

    assert_eq!(messages.len(), 3);
    assert_eq!(participants(&messages[2]), ("user-b", "user-c"));
}
