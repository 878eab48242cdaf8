use sea_orm::DatabaseConnection;

use crate::server::{data::listing::ListRepository, error::AppError, model::listing::ListResource};

/// Service producing the response items of a list endpoint.
pub struct ListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads every row of the resource and converts each into its DTO.
    ///
    /// # Returns
    /// - `Ok(Vec<R::Dto>)` - Items in resource order
    /// - `Err(AppError::DbErr)` - Query failed
    pub async fn list<R: ListResource>(&self) -> Result<Vec<R::Dto>, AppError> {
        let rows = ListRepository::new(self.db).fetch_all::<R>().await?;

        Ok(rows.into_iter().map(R::into_dto).collect())
    }
}
