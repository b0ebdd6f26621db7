mod helpers;

use axum::http::StatusCode;
use league_ops_server::routes::auth::LoginView;
use serde_json::{json, Value};

use crate::helpers::{create_user, login, PASSWORD};

test_with_server!(health_check_returns_version, |server, ctx_state, config| {
    let response = server.get("/hc").await;
    response.assert_status_ok();
    assert!(response.text().starts_with('v'));
});

test_with_server!(login_sets_session_cookie, |server, ctx_state, config| {
    let user = create_user(&ctx_state, "school_admin", |mut u| {
        u.school_ids = Some(vec!["S1".to_string()]);
        u
    })
    .await;

    let response = server
        .post("/api/login")
        .json(&json!({ "username": user.username.to_uppercase(), "password": PASSWORD }))
        .await;
    response.assert_status_success();
    let view = response.json::<LoginView>();
    assert_eq!(view.id, user.id);
    assert_eq!(view.role, "school_admin");
    assert!(!view.token.is_empty());
    assert_eq!(response.cookie("jwt").value(), view.token);

    let response = server.get("/api/users/current").await;
    response.assert_status_success();
    let session = response.json::<Value>();
    assert_eq!(session["user"]["id"], json!(user.id));
    assert_eq!(session["scope"]["school_ids"], json!(["S1"]));
});

test_with_server!(login_with_wrong_password_fails, |server, ctx_state, config| {
    let user = create_user(&ctx_state, "coach", |u| u).await;

    server
        .post("/api/login")
        .json(&json!({ "username": user.username, "password": "wrong" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/api/login")
        .json(&json!({ "username": "nobody", "password": PASSWORD }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/api/login")
        .json(&json!({ "username": "", "password": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
});

test_with_server!(requests_without_session_are_unauthorized, |server, ctx_state, config| {
    server
        .get("/api/events")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .get("/api/users/current")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
});

test_with_server!(logout_ends_session, |server, ctx_state, config| {
    let user = create_user(&ctx_state, "league_admin", |mut u| {
        u.league_ids = Some(vec!["L1".to_string()]);
        u
    })
    .await;
    login(&server, &user).await;
    server.get("/api/users/current").await.assert_status_success();

    server.get("/api/logout").await.assert_status_ok();

    server
        .get("/api/users/current")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
});

test_with_server!(invalid_session_cookie_is_rejected, |server, ctx_state, config| {
    server
        .get("/api/users/current")
        .add_header("Cookie", "jwt=not-a-token")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
});
