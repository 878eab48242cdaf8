use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let found = UserRepository::new(db).find_by_id(created.id).await?;

    let user = found.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.name, created.name);
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests that an unknown ID yields no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests finding a user by exact email.
///
/// Expected: Ok(Some(User)) for the matching email only
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ustadz@example.com")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("ustadz@example.com").await?;
    let missing = repo.find_by_email("santri@example.com").await?;

    assert_eq!(found.unwrap().email, "ustadz@example.com");
    assert!(missing.is_none());

    Ok(())
}
