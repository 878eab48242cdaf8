use super::*;
use crate::{
    model::auth::{SignInDto, SignUpDto},
    server::controller::auth::{get_session, sign_in, sign_out, sign_up},
};

fn sign_up_dto(email: &str) -> SignUpDto {
    SignUpDto {
        name: "Ahmad".to_string(),
        email: email.to_string(),
        password: "bismillah123".to_string(),
    }
}

/// Tests that a fresh sign-up is immediately visible through get-session.
///
/// Expected: sign-up returns the user and get-session returns the same user
#[tokio::test]
async fn sign_up_then_get_session_returns_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    let response = sign_up(
        State(state.clone()),
        session.clone(),
        Ok(Json(sign_up_dto("Ahmad@Example.com"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let signed_up = body_json(response).await;
    assert_eq!(signed_up["user"]["email"], "ahmad@example.com");
    assert_eq!(signed_up["user"]["name"], "Ahmad");

    let response = get_session(State(state), session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, signed_up);

    Ok(())
}

/// Tests that signing out clears the session.
///
/// Expected: sign-out returns `{"success":true}` and get-session returns null
#[tokio::test]
async fn sign_out_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    sign_up(
        State(state.clone()),
        session.clone(),
        Ok(Json(sign_up_dto("ahmad@example.com"))),
    )
    .await
    .into_response();

    let response = sign_out(session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));

    let response = get_session(State(state), session.clone())
        .await
        .into_response();

    assert_eq!(body_bytes(response).await, b"null".to_vec());

    Ok(())
}

/// Tests that sign-out succeeds without a session.
///
/// Expected: 200 `{"success":true}`
#[tokio::test]
async fn sign_out_without_session_succeeds() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let response = sign_out(session.clone()).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"success": true}));

    Ok(())
}

/// Tests that a second sign-up with the same email is refused.
///
/// Expected: 422 `{"error":"User already exists"}`
#[tokio::test]
async fn duplicate_sign_up_is_unprocessable() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    sign_up(
        State(state.clone()),
        session.clone(),
        Ok(Json(sign_up_dto("ahmad@example.com"))),
    )
    .await
    .into_response();

    let response = sign_up(
        State(state),
        session.clone(),
        Ok(Json(sign_up_dto("ahmad@example.com"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await,
        json!({"error": "User already exists"})
    );

    Ok(())
}

/// Tests that a too-short password is a bad request.
///
/// Expected: 400 with an error envelope
#[tokio::test]
async fn sign_up_with_short_password_is_bad_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = sign_up(
        State(AppState::new(db.clone())),
        session.clone(),
        Ok(Json(SignUpDto {
            password: "pendek".to_string(),
            ..sign_up_dto("ahmad@example.com")
        })),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    Ok(())
}

/// Tests that a wrong password is rejected with the generic credentials message.
///
/// Expected: 401 `{"error":"Invalid email or password"}` and no session established
#[tokio::test]
async fn sign_in_with_wrong_password_is_unauthorized() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    sign_up(
        State(state.clone()),
        session.clone(),
        Ok(Json(sign_up_dto("ahmad@example.com"))),
    )
    .await
    .into_response();
    sign_out(session.clone()).await.into_response();

    let response = sign_in(
        State(state.clone()),
        session.clone(),
        Ok(Json(SignInDto {
            email: "ahmad@example.com".to_string(),
            password: "salah-password".to_string(),
        })),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid email or password"})
    );

    let response = get_session(State(state), session.clone())
        .await
        .into_response();
    assert_eq!(body_bytes(response).await, b"null".to_vec());

    Ok(())
}

/// Tests signing back in after signing out.
///
/// Expected: 200 with the registered user, visible through get-session
#[tokio::test]
async fn sign_in_restores_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    sign_up(
        State(state.clone()),
        session.clone(),
        Ok(Json(sign_up_dto("ahmad@example.com"))),
    )
    .await
    .into_response();
    sign_out(session.clone()).await.into_response();

    let response = sign_in(
        State(state.clone()),
        session.clone(),
        Ok(Json(SignInDto {
            email: "ahmad@example.com".to_string(),
            password: "bismillah123".to_string(),
        })),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let signed_in = body_json(response).await;
    assert_eq!(signed_in["user"]["email"], "ahmad@example.com");

    let response = get_session(State(state), session.clone())
        .await
        .into_response();
    assert_eq!(body_json(response).await, signed_in);

    Ok(())
}
