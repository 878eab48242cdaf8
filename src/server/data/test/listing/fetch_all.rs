use super::*;

/// Tests that an empty table yields an empty list.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_list_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Classes)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = ListRepository::new(db).fetch_all::<ClassList>().await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests that roles come back in ID order regardless of insertion order.
///
/// Expected: Ok with roles sorted by ascending ID
#[tokio::test]
async fn orders_roles_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_role(db).await?;
    let second = factory::create_role(db).await?;
    let third = factory::create_role(db).await?;

    let rows = ListRepository::new(db).fetch_all::<RoleList>().await?;

    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that classes are sorted by name, not by insertion order.
///
/// Expected: Ok with "Kelas A" before "Kelas B"
#[tokio::test]
async fn orders_classes_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Classes)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_class(db, "Kelas B").await?;
    factory::create_class(db, "Kelas A").await?;

    let rows = ListRepository::new(db).fetch_all::<ClassList>().await?;

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Kelas A", "Kelas B"]);

    Ok(())
}

/// Tests that surahs are sorted by surah number.
///
/// Expected: Ok with surah 1 before surah 2 even when 2 was inserted first
#[tokio::test]
async fn orders_surahs_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::QuranMeta)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_surah(db, 2).await?;
    factory::create_surah(db, 1).await?;

    let rows = ListRepository::new(db).fetch_all::<SurahList>().await?;

    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests that tags are sorted by category first and by text within a category.
///
/// Expected: Ok with ("a", "x"), ("a", "y"), ("z", "a")
#[tokio::test]
async fn orders_tags_by_category_then_text() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MasterTags)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db, "z", "a").await?;
    factory::create_tag(db, "a", "y").await?;
    factory::create_tag(db, "a", "x").await?;

    let rows = ListRepository::new(db).fetch_all::<TagList>().await?;

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.category.as_str(), r.tag_text.as_str()))
        .collect();
    assert_eq!(keys, vec![("a", "x"), ("a", "y"), ("z", "a")]);

    Ok(())
}

/// Tests that reading a table that does not exist fails instead of returning nothing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListRepository::new(db).fetch_all::<TagList>().await;

    assert!(result.is_err());

    Ok(())
}
