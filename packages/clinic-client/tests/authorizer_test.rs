mod support;

use clinic_client::{
    ApiError, ApiRequest, HttpTransport, StoreError, TokenStore, ACCESS_TOKEN_COOKIE,
    REFRESH_TOKEN_COOKIE,
};
use client_test_support::envelopes;
use support::test_stack;

#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}

fn set_access_token(stack: &support::TestStack, value: &str) -> Result<(), StoreError> {
    stack.store.set(ACCESS_TOKEN_COOKIE, value, 1)
}

#[tokio::test]
async fn non_api_paths_pass_through_untouched() {
    let stack = test_stack();
    set_access_token(&stack, "abc").unwrap();

    stack
        .authorized
        .send(ApiRequest::get("/assets/logo.svg"))
        .await
        .unwrap();

    let sent = stack.wire.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].authorization, None);
    assert_eq!(stack.navigator.login_navigations(), 0);
}

#[tokio::test]
async fn public_routes_pass_through_untouched() {
    let stack = test_stack();
    set_access_token(&stack, "abc").unwrap();

    stack
        .authorized
        .send(ApiRequest::post(
            "/api/auth/login",
            serde_json::json!({ "documento": "1", "contrasena": "x" }),
        ))
        .await
        .unwrap();

    let sent = stack.wire.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].authorization, None);
    assert_eq!(stack.navigator.login_navigations(), 0);
}

#[tokio::test]
async fn protected_request_carries_exact_bearer_header() {
    let stack = test_stack();
    set_access_token(&stack, "abc").unwrap();

    stack
        .authorized
        .send(ApiRequest::get("/api/patients"))
        .await
        .unwrap();

    let sent = stack.wire.sent();
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn prefixed_token_is_not_double_prefixed() {
    let stack = test_stack();
    set_access_token(&stack, "Bearer abc").unwrap();

    stack
        .authorized
        .send(ApiRequest::get("/api/patients"))
        .await
        .unwrap();

    assert_eq!(
        stack.wire.sent()[0].authorization.as_deref(),
        Some("Bearer abc")
    );
}

#[tokio::test]
async fn quoted_token_loses_one_quote_layer() {
    let stack = test_stack();
    set_access_token(&stack, "\"abc\"").unwrap();

    stack
        .authorized
        .send(ApiRequest::get("/api/patients"))
        .await
        .unwrap();

    assert_eq!(
        stack.wire.sent()[0].authorization.as_deref(),
        Some("Bearer abc")
    );
}

#[tokio::test]
async fn missing_token_redirects_once_and_still_forwards() {
    let stack = test_stack();

    stack
        .authorized
        .send(ApiRequest::get("/api/patients"))
        .await
        .unwrap();

    // Forwarded unmodified, no header attached.
    let sent = stack.wire.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].authorization, None);
    assert_eq!(sent[0].path, "/api/patients");
    assert_eq!(stack.navigator.login_navigations(), 1);
}

#[tokio::test]
async fn unauthorized_response_tears_down_session_once() {
    let stack = test_stack();
    set_access_token(&stack, "expired-token").unwrap();
    stack.store.set(REFRESH_TOKEN_COOKIE, "r", 7).unwrap();
    stack
        .wire
        .enqueue_err(ApiError::from_status(401, &envelopes::error_message("expired")));

    let outcome = stack.authorized.send(ApiRequest::get("/api/patients")).await;

    // The original error is still observable by the caller.
    match outcome {
        Err(err) => assert_eq!(err.status(), 401),
        Ok(_) => panic!("expected the 401 to propagate"),
    }
    // Exactly one logout (both tokens gone) and one navigation.
    assert_eq!(stack.session.access_token(), None);
    assert_eq!(stack.session.refresh_token(), None);
    assert_eq!(stack.navigator.login_navigations(), 1);
}

#[tokio::test]
async fn forbidden_response_leaves_session_alone() {
    let stack = test_stack();
    set_access_token(&stack, "abc").unwrap();
    stack
        .wire
        .enqueue_err(ApiError::from_status(403, &envelopes::error_message("no access")));

    let outcome = stack.authorized.send(ApiRequest::get("/api/users")).await;

    assert!(matches!(outcome, Err(ApiError::Forbidden { .. })));
    assert_eq!(stack.session.access_token().as_deref(), Some("abc"));
    assert_eq!(stack.navigator.login_navigations(), 0);
}

#[tokio::test]
async fn connectivity_failure_leaves_session_alone() {
    let stack = test_stack();
    set_access_token(&stack, "abc").unwrap();
    stack
        .wire
        .enqueue_err(ApiError::connectivity("connection refused"));

    let outcome = stack.authorized.send(ApiRequest::get("/api/patients")).await;

    match outcome {
        Err(err) => assert_eq!(err.status(), 0),
        Ok(_) => panic!("expected the connectivity error to propagate"),
    }
    assert_eq!(stack.session.access_token().as_deref(), Some("abc"));
    assert_eq!(stack.navigator.login_navigations(), 0);
}

#[tokio::test]
async fn successful_response_passes_through_unaltered() {
    let stack = test_stack();
    set_access_token(&stack, "abc").unwrap();
    stack
        .wire
        .enqueue_ok(200, serde_json::json!({ "success": true, "data": [] }));

    let response = stack
        .authorized
        .send(ApiRequest::get("/api/patients"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], serde_json::json!(true));
    assert_eq!(stack.navigator.login_navigations(), 0);
}
