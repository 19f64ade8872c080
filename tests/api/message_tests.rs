//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::*;

/// Alice→Bob "A", Alice→Chuck "B", Bob→Chuck "C", created in that order
async fn three_messages() -> TestApp {
    let app = TestApp::with_users().await;
    app.send(&ALICE, &BOB, "A").await;
    app.send(&ALICE, &CHUCK, "B").await;
    app.send(&BOB, &CHUCK, "C").await;
    app
}

fn texts(messages: &[Value]) -> Vec<&str> {
    messages.iter().map(|m| m["text"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_list_messages_empty_initially() {
    let app = TestApp::with_users().await;

    let response = app.server.get("/messages").await;

    response.assert_status_ok();
    assert_json_utf8(&response);
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_messages_in_creation_order_with_users_embedded() {
    let app = three_messages().await;

    let response = app.server.get("/messages").await;

    response.assert_status_ok();
    assert_json_utf8(&response);
    let messages: Vec<Value> = response.json();
    assert_eq!(texts(&messages), vec!["A", "B", "C"]);
    assert_eq!(participants(&messages[0]), ("alice", "bob"));
    assert_eq!(participants(&messages[1]), ("alice", "chuck"));
    assert_eq!(participants(&messages[2]), ("bob", "chuck"));
}

#[test_case(Some(ALICE), None, &["A", "B"] ; "filter by from")]
#[test_case(None, Some(CHUCK), &["B", "C"] ; "filter by to")]
#[test_case(Some(ALICE), Some(BOB), &["A"] ; "filter by from and to")]
#[test_case(Some(CHUCK), None, &[] ; "no matches")]
#[tokio::test]
async fn test_list_messages_filtered(
    from: Option<TestUser>,
    to: Option<TestUser>,
    expected: &[&str],
) {
    let app = three_messages().await;

    let mut request = app.server.get("/messages");
    if let Some(from) = from {
        request = request.add_query_param("from", from.id);
    }
    if let Some(to) = to {
        request = request.add_query_param("to", to.id);
    }
    let response = request.await;

    response.assert_status_ok();
    let messages: Vec<Value> = response.json();
    assert_eq!(texts(&messages), expected.to_vec());
}

#[tokio::test]
async fn test_empty_filter_values_are_ignored() {
    let app = three_messages().await;

    let messages: Vec<Value> = app.server.get("/messages?from=&to=").await.json();

    assert_eq!(texts(&messages), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_create_message() {
    let app = TestApp::with_users().await;

    let response = app
        .server
        .post("/messages")
        .json(&json!({ "from": ALICE.id, "to": BOB.id, "text": "Hi Bob" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_json_utf8(&response);
    response.assert_json(&json!({}));
    let id = location_id(&response, "/messages/");

    let stored: Value = app.server.get(&format!("/messages/{id}")).await.json();
    assert_eq!(
        stored,
        json!({
            "id": id,
            "from": { "id": ALICE.id, "username": "alice" },
            "to": { "id": BOB.id, "username": "bob" },
            "text": "Hi Bob"
        })
    );
}

#[test_case(json!({ "from": ALICE.id, "to": BOB.id }), "Missing field: text" ; "missing text")]
#[test_case(
    json!({ "from": ALICE.id, "to": BOB.id, "text": 1234 }),
    "Incorrect field type: text" ;
    "non-string text"
)]
#[test_case(
    json!({ "from": ALICE.id, "to": 1234, "text": "Hi" }),
    "Incorrect field type: to" ;
    "non-string to"
)]
#[test_case(
    json!({ "from": 1234, "to": BOB.id, "text": "Hi" }),
    "Incorrect field type: from" ;
    "non-string from"
)]
#[test_case(json!({}), "Missing field: from" ; "everything missing reports from")]
#[test_case(json!({ "from": ALICE.id }), "Missing field: to" ; "to and text missing reports to")]
#[test_case(
    json!({ "from": "DDDDDDDDDDDDDDDDDDDDDDDD", "to": BOB.id, "text": "Hi Bob" }),
    "Incorrect field value: from" ;
    "non-existent sender"
)]
#[test_case(
    json!({ "from": ALICE.id, "to": "dddddddddddddddddddddddd", "text": "Hi Dan" }),
    "Incorrect field value: to" ;
    "non-existent recipient"
)]
#[test_case(
    json!({ "from": "DDDDDDDDDDDDDDDDDDDDDDDD", "to": "dddddddddddddddddddddddd", "text": "Hi" }),
    "Incorrect field value: from" ;
    "both unknown reports from"
)]
#[test_case(
    json!({ "from": "DDDDDDDDDDDDDDDDDDDDDDDD", "to": BOB.id, "text": false }),
    "Incorrect field type: text" ;
    "type errors precede referential checks"
)]
#[tokio::test]
async fn test_create_message_rejects_invalid_payload(body: Value, message: &str) {
    let app = TestApp::with_users().await;

    let response = app.server.post("/messages").json(&body).expect_failure().await;

    assert_error(&response, StatusCode::UNPROCESSABLE_ENTITY, message);
    app.server.get("/messages").await.assert_json(&json!([]));
}

#[test_case("application/json", "[]" ; "empty array")]
#[test_case(
    "application/json",
    r#"["aaaaaaaaaaaaaaaaaaaaaaaa", "bbbbbbbbbbbbbbbbbbbbbbbb", "Hi Bob"]"# ;
    "positional array"
)]
#[test_case("application/json", r#""Hi Bob""# ; "string")]
#[test_case("application/json", "42" ; "number")]
#[test_case("application/json", "null" ; "null")]
#[test_case(
    "text/plain",
    r#"{"from":"aaaaaaaaaaaaaaaaaaaaaaaa","to":"bbbbbbbbbbbbbbbbbbbbbbbb","text":"Hi Bob"}"# ;
    "non-json content type"
)]
#[tokio::test]
async fn test_create_message_rejects_non_object_body(content_type: &str, body: &str) {
    let app = TestApp::with_users().await;

    let response = app
        .server
        .post("/messages")
        .content_type(content_type)
        .bytes(body.to_owned().into())
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_json_utf8(&response);
    let body: Value = response.json();
    assert!(body["message"].is_string());
    app.server.get("/messages").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_get_unknown_message_is_not_found() {
    let app = TestApp::with_users().await;

    let response = app
        .server
        .get("/messages/000000000000000000000000")
        .expect_failure()
        .await;

    assert_error(&response, StatusCode::NOT_FOUND, "Message not found");
}

#[tokio::test]
async fn test_get_single_message() {
    let app = TestApp::with_users().await;
    let id = app.send(&ALICE, &BOB, "Hi Bob").await;

    let response = app.server.get(&format!("/messages/{id}")).await;

    response.assert_status_ok();
    assert_json_utf8(&response);
    let message: Value = response.json();
    assert_eq!(message["text"], "Hi Bob");
    assert_eq!(participants(&message), ("alice", "bob"));
}

#[tokio::test]
async fn test_embedded_users_reflect_current_username() {
    let app = TestApp::with_users().await;
    let id = app.send(&ALICE, &BOB, "Hi Bob").await;

    app.server
        .put(&format!("/users/{}", BOB.id))
        .json(&json!({ "username": "robert" }))
        .await
        .assert_status_ok();

    let message: Value = app.server.get(&format!("/messages/{id}")).await.json();
    assert_eq!(participants(&message), ("alice", "robert"));
}

#[tokio::test]
async fn test_deleted_user_embeds_as_null() {
    let app = TestApp::with_users().await;
    let id = app.send(&ALICE, &BOB, "Hi Bob").await;

    app.server
        .delete(&format!("/users/{}", ALICE.id))
        .await
        .assert_status_ok();

    let response = app.server.get(&format!("/messages/{id}")).await;
    response.assert_status_ok();
    let message: Value = response.json();
    assert_eq!(message["from"], Value::Null);
    assert_eq!(message["to"]["username"], "bob");

    // Listing and filtering still work on the dangling id.
    let listed: Vec<Value> = app
        .server
        .get("/messages")
        .add_query_param("from", ALICE.id)
        .await
        .json();
    assert_eq!(texts(&listed), vec!["Hi Bob"]);
    assert_eq!(listed[0]["from"], Value::Null);
}
