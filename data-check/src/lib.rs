//! Database sanity check.
//!
//! Prints the role, user and user-role tables so an operator can confirm the database
//! is reachable and populated. Reads run one after another; the first failure stops
//! the check.

pub mod error;
pub mod table;

use std::io::Write;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder,
    QuerySelect,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CheckError;

/// Public projection of a user; credentials and timestamps are never printed.
#[derive(Debug, FromQueryResult, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Reads `DATABASE_URL` from the environment.
pub fn database_url() -> Result<String, CheckError> {
    std::env::var("DATABASE_URL").map_err(|_| CheckError::MissingEnvVar("DATABASE_URL".to_string()))
}

pub async fn connect(database_url: &str) -> Result<DatabaseConnection, CheckError> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Writes the three titled tables to `out`.
pub async fn run(db: &DatabaseConnection, out: &mut impl Write) -> Result<(), CheckError> {
    let roles = entity::prelude::Role::find()
        .order_by_asc(entity::role::Column::Id)
        .all(db)
        .await?;
    write_section(out, "Roles", &roles)?;

    let users = entity::prelude::User::find()
        .select_only()
        .columns([
            entity::user::Column::Id,
            entity::user::Column::Name,
            entity::user::Column::Email,
        ])
        .order_by_asc(entity::user::Column::Id)
        .into_model::<UserSummary>()
        .all(db)
        .await?;
    write_section(out, "Users", &users)?;

    let user_roles = entity::prelude::UserRole::find()
        .order_by_asc(entity::user_role::Column::Id)
        .all(db)
        .await?;
    write_section(out, "User roles", &user_roles)?;

    Ok(())
}

fn write_section<T: Serialize>(
    out: &mut impl Write,
    title: &str,
    rows: &[T],
) -> Result<(), CheckError> {
    let objects = rows
        .iter()
        .map(|row| match serde_json::to_value(row)? {
            Value::Object(map) => Ok(map),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                Ok(map)
            }
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    tracing::debug!("Read {} rows for {}", objects.len(), title);

    writeln!(out, "{}:", title)?;
    write!(out, "{}", table::render(&objects))?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn prints_three_titled_tables() -> Result<(), CheckError> {
        let test = TestBuilder::new().with_role_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .name("Ahmad")
            .email("ahmad@example.test")
            .build()
            .await?;
        let role = factory::role::RoleFactory::new(db)
            .name("admin")
            .build()
            .await?;
        factory::create_user_role(db, user.id, role.id).await?;

        let mut out = Vec::new();
        run(db, &mut out).await?;
        let report = String::from_utf8(out).unwrap();

        let roles_at = report.find("Roles:").unwrap();
        let users_at = report.find("Users:").unwrap();
        let user_roles_at = report.find("User roles:").unwrap();
        assert!(roles_at < users_at && users_at < user_roles_at);

        assert!(report.contains("│ (index) │ id │ name  │ email              │"));
        assert!(report.contains("│ 0       │ 1  │ Ahmad │ ahmad@example.test │"));
        assert!(report.contains("admin"));
        assert!(!report.contains("createdAt"));

        Ok(())
    }

    #[tokio::test]
    async fn fails_when_tables_are_missing() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let mut out = Vec::new();
        let result = run(db, &mut out).await;

        assert!(matches!(result, Err(CheckError::Database(_))));
    }

    #[tokio::test]
    async fn fails_on_unreachable_database() {
        let result = connect("sqlite:///nonexistent-dir/tahfidz.db").await;

        assert!(matches!(result, Err(CheckError::Database(_))));
    }
}
