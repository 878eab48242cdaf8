use super::*;
use crate::server::error::{auth::AuthError, AppError};
use sea_orm::{EntityTrait, PaginatorTrait};

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Ahmad".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

/// Tests that registering a user writes both the user and the credential account.
///
/// Expected: Ok(User) with one account row referencing the user
#[tokio::test]
async fn creates_user_and_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create_with_credential(param("ahmad@example.com"))
        .await?;

    assert_eq!(user.name, "Ahmad");
    assert_eq!(user.email, "ahmad@example.com");

    let accounts = entity::prelude::Account::find().all(db).await?;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].user_id, user.id);
    assert_eq!(accounts[0].provider_id, "credential");

    Ok(())
}

/// Tests that a duplicate email is rejected and leaves no extra rows behind.
///
/// Expected: Err(UserAlreadyExists) with exactly one user and one account remaining
#[tokio::test]
async fn rejects_duplicate_email_atomically() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create_with_credential(param("ahmad@example.com"))
        .await?;

    let result = repo
        .create_with_credential(param("ahmad@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserAlreadyExists))
    ));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Account::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an email taken by a row written outside the registration path is
/// reported as an existing user rather than a database failure.
///
/// Expected: Err(UserAlreadyExists) and no account row created
#[tokio::test]
async fn maps_unique_email_violation_to_user_already_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create_with_credential(param("taken@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserAlreadyExists))
    ));
    assert_eq!(entity::prelude::Account::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failure other than a unique violation stays a database error.
///
/// Expected: Err(AppError::DbErr) when the account table is missing
#[tokio::test]
async fn keeps_other_database_errors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .create_with_credential(param("ahmad@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
