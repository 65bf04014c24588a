//! Tests for the disambiguation step: two accounts match one name and the
//! requester picks between them by token.

mod common;

use common::create_test_server;
use serde_json::{Value, json};

/// Submit the shared name and return the prompt body.
async fn start_disambiguation(server: &axum_test::TestServer) -> Value {
    let response = server
        .post("/reset/name")
        .json(&json!({ "name": "shared@example.com" }))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

/// Test: a name matching two different accounts yields a choice prompt
/// instead of a dispatch, email match first
#[tokio::test]
async fn test_two_matches_require_a_choice() {
    let (server, notifier, audit) = create_test_server();

    let body = start_disambiguation(&server).await;
    assert_eq!(body["success"], true);

    let choices = body["prompt"]["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0]["label"]["kind"], "by_email");
    assert_eq!(choices[0]["label"]["email"], "shared@example.com");
    assert_eq!(choices[1]["label"]["kind"], "by_username");
    assert_eq!(choices[1]["label"]["username"], "shared@example.com");

    // The email match is preselected.
    assert_eq!(body["prompt"]["default_token"], choices[0]["token"]);

    // Nothing was dispatched yet.
    assert!(notifier.sent().is_empty());
    assert!(audit.events().is_empty());
}

/// Test: the prompt labels never expose the other account's identifier
#[tokio::test]
async fn test_prompt_only_repeats_the_submitted_input() {
    let (server, _, _) = create_test_server();

    let body = start_disambiguation(&server).await;
    let raw = body["prompt"].to_string();
    assert!(!raw.contains("carol"));
    assert!(!raw.contains("dave@example.com"));
}

/// Test: mid-disambiguation state is held server-side and survives into
/// the next request on the same flow cookie
#[tokio::test]
async fn test_disambiguation_state_persists_across_requests() {
    let (server, _, _) = create_test_server();

    start_disambiguation(&server).await;

    let view: Value = server.get("/reset").await.json();
    assert_eq!(view["step"], "account_choice");
    assert_eq!(view["prompt"]["choices"].as_array().unwrap().len(), 2);
}

/// Test: a different flow does not see this flow's pending choice
#[tokio::test]
async fn test_other_flows_start_fresh() {
    let (mut server, _, _) = create_test_server();

    start_disambiguation(&server).await;

    // Dropping the cookie makes the next request a brand-new flow.
    server.clear_cookies();
    let view: Value = server.get("/reset").await.json();
    assert_eq!(view["step"], "name_entry");
}

/// Test: choosing the username-matched token dispatches to that account
#[tokio::test]
async fn test_choosing_a_token_dispatches_to_that_account() {
    let (server, notifier, _) = create_test_server();

    let body = start_disambiguation(&server).await;
    let token = body["prompt"]["choices"][1]["token"].as_str().unwrap();

    let response = server
        .post("/reset/choice")
        .json(&json!({ "token": token }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    // The username match is dave; his registered address gets the mail.
    assert_eq!(notifier.sent(), vec![("dave@example.com".to_string(), "en".to_string())]);

    // The flow is finished and back at the start.
    let view: Value = server.get("/reset").await.json();
    assert_eq!(view["step"], "name_entry");
}

/// Test: a forged token is rejected and the choice remains pending
#[tokio::test]
async fn test_forged_token_is_rejected() {
    let (server, notifier, _) = create_test_server();

    start_disambiguation(&server).await;

    let response = server
        .post("/reset/choice")
        .json(&json!({ "token": "forged-token" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(notifier.sent().is_empty());

    // Still awaiting the choice; a valid token works afterwards.
    let view: Value = server.get("/reset").await.json();
    assert_eq!(view["step"], "account_choice");
    let token = view["prompt"]["default_token"].as_str().unwrap().to_string();

    let retry = server.post("/reset/choice").json(&json!({ "token": token })).await;
    assert_eq!(retry.status_code(), 200);
    assert_eq!(notifier.sent(), vec![("shared@example.com".to_string(), "en".to_string())]);
}

/// Test: a choice with no pending disambiguation is out of order
#[tokio::test]
async fn test_choice_without_pending_prompt_is_rejected() {
    let (server, notifier, _) = create_test_server();

    let response = server
        .post("/reset/choice")
        .json(&json!({ "token": "anything" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert!(notifier.sent().is_empty());
}

/// Test: a name submission while a choice is pending is out of order
#[tokio::test]
async fn test_name_submission_while_choice_pending_is_rejected() {
    let (server, notifier, _) = create_test_server();

    start_disambiguation(&server).await;

    let response = server
        .post("/reset/name")
        .json(&json!({ "name": "alice@example.com" }))
        .await;

    assert_eq!(response.status_code(), 409);
    assert!(notifier.sent().is_empty());

    // The pending choice is untouched.
    let view: Value = server.get("/reset").await.json();
    assert_eq!(view["step"], "account_choice");
}
