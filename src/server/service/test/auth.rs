use super::*;

/// Tests that sign-up stores a normalized email.
///
/// Expected: Ok(User) with trimmed, lowercased email and trimmed name
#[tokio::test]
async fn sign_up_normalizes_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .sign_up("  Ahmad  ", "  Ahmad@Example.COM ", "bismillah123")
        .await?;

    assert_eq!(user.name, "Ahmad");
    assert_eq!(user.email, "ahmad@example.com");

    Ok(())
}

/// Tests that sign-up rejects names, emails and passwords that fail validation.
///
/// Expected: Err(AppError::BadRequest) for each invalid input
#[tokio::test]
async fn sign_up_validates_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let too_long = "a".repeat(129);
    let cases = [
        ("   ", "a@example.com", "bismillah123"),
        ("Ahmad", "  ", "bismillah123"),
        ("Ahmad", "a@example.com", "short"),
        ("Ahmad", "a@example.com", too_long.as_str()),
    ];

    for (name, email, password) in cases {
        let result = service.sign_up(name, email, password).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests that the password length bounds are inclusive.
///
/// Expected: Ok for passwords of exactly 8 and exactly 128 characters
#[tokio::test]
async fn sign_up_accepts_boundary_password_lengths() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service
        .sign_up("Short", "short@example.com", &"a".repeat(8))
        .await?;
    service
        .sign_up("Long", "long@example.com", &"a".repeat(128))
        .await?;

    Ok(())
}

/// Tests that an email differing only in case and whitespace counts as taken.
///
/// Expected: Err(AuthError::UserAlreadyExists)
#[tokio::test]
async fn sign_up_rejects_existing_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service
        .sign_up("Ahmad", "ahmad@example.com", "bismillah123")
        .await?;
    let result = service
        .sign_up("Ahmad Lain", " AHMAD@example.com", "bismillah456")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserAlreadyExists))
    ));

    Ok(())
}

/// Tests signing in with the credentials used at sign-up.
///
/// Expected: Ok(User) for the registered user, email matched case-insensitively
#[tokio::test]
async fn sign_in_accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let registered = service
        .sign_up("Ahmad", "ahmad@example.com", "bismillah123")
        .await?;
    let signed_in = service.sign_in("Ahmad@Example.com", "bismillah123").await?;

    assert_eq!(signed_in.id, registered.id);

    Ok(())
}

/// Tests that a wrong password and an unknown email fail identically.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn sign_in_rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service
        .sign_up("Ahmad", "ahmad@example.com", "bismillah123")
        .await?;

    let wrong_password = service.sign_in("ahmad@example.com", "bismillah999").await;
    let unknown_email = service.sign_in("nobody@example.com", "bismillah123").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a user without a credential account cannot sign in.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn sign_in_rejects_user_without_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = AuthService::new(db)
        .sign_in(&user.email, "bismillah123")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
