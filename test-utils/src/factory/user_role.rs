//! Factory for user-role association rows.
//!
//! Both the user and the role must already exist, as the join table carries foreign
//! keys to each.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an association between a user and a role.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `role_id` - ID of an existing role
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Created association
/// - `Err(DbErr)` - Database error, including foreign key or uniqueness violations
pub async fn create_user_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn links_existing_user_and_role() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_role_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let role = factory::create_role(db).await?;

        let link = create_user_role(db, user.id, role.id).await?;

        assert_eq!(link.user_id, user.id);
        assert_eq!(link.role_id, role.id);

        Ok(())
    }
}
