use super::*;
use crate::state::test_helpers;
use axum::http::Request;
use axum::http::header::COOKIE;

fn parts_with_cookie(cookie: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let (parts, ()) = builder.body(()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn missing_cookie_mints_new_session() {
    let state = test_helpers::test_app_state();
    let mut parts = parts_with_cookie(None);
    let session = Session::from_request_parts(&mut parts, &state).await.unwrap();

    assert!(is_valid_token(&session.token));
    let cookie = session.jar.get(COOKIE_NAME).unwrap();
    assert_eq!(cookie.value(), session.token);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[tokio::test]
async fn known_cookie_is_reused_without_set_cookie() {
    let state = test_helpers::test_app_state();
    let token = generate_token();
    let mut parts = parts_with_cookie(Some(&format!("{COOKIE_NAME}={token}")));
    let session = Session::from_request_parts(&mut parts, &state).await.unwrap();

    assert_eq!(session.token, token);
    assert!(session.jar.get(COOKIE_NAME).is_none());
}

#[tokio::test]
async fn malformed_cookie_is_replaced() {
    let state = test_helpers::test_app_state();
    let mut parts = parts_with_cookie(Some(&format!("{COOKIE_NAME}=not-a-token")));
    let session = Session::from_request_parts(&mut parts, &state).await.unwrap();

    assert_ne!(session.token, "not-a-token");
    assert!(session.jar.get(COOKIE_NAME).is_some());
}

#[tokio::test]
async fn secure_flag_follows_state() {
    let state = AppState::with_stub_generator(true);
    let mut parts = parts_with_cookie(None);
    let session = Session::from_request_parts(&mut parts, &state).await.unwrap();

    assert_eq!(session.jar.get(COOKIE_NAME).unwrap().secure(), Some(true));
}
