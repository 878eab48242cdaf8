use crate::server::{
    data::{account::AccountRepository, user::UserRepository},
    error::AppError,
    model::user::CreateUserParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests reading back the password hash stored at registration.
///
/// Expected: Ok(Some(hash)) equal to the stored hash
#[tokio::test]
async fn finds_password_hash_for_registered_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create_with_credential(CreateUserParam {
            name: "Fatimah".to_string(),
            email: "fatimah@example.com".to_string(),
            password_hash: "stored-hash".to_string(),
        })
        .await?;

    let hash = AccountRepository::new(db).find_password_hash(user.id).await?;

    assert_eq!(hash.as_deref(), Some("stored-hash"));

    Ok(())
}

/// Tests that a user without a credential account has no hash.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let hash = AccountRepository::new(db).find_password_hash(user.id).await?;

    assert!(hash.is_none());

    Ok(())
}

/// Tests that accounts from other providers are not treated as credentials.
///
/// Expected: Ok(None) for a user whose only account has a different provider
#[tokio::test]
async fn ignores_non_credential_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::account::AccountFactory::new(db, user.id)
        .provider_id("google")
        .password("unused")
        .build()
        .await?;

    let hash = AccountRepository::new(db).find_password_hash(user.id).await?;

    assert!(hash.is_none());

    Ok(())
}
