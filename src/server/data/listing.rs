//! Generic repository for full-table list reads.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::server::model::listing::ListResource;

/// Reads every row of a [`ListResource`] table.
pub struct ListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListRepository<'a> {
    /// Creates a new ListRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ListRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches all rows of the resource's table.
    ///
    /// Selects the resource's projection (or every column when the projection is empty)
    /// and sorts ascending by each ordering column in turn. No filtering or pagination
    /// is applied.
    ///
    /// # Returns
    /// - `Ok(Vec<R::Row>)` - Every row in resource order, empty if the table is empty
    /// - `Err(DbErr)` - Query failed, including a missing table
    pub async fn fetch_all<R: ListResource>(&self) -> Result<Vec<R::Row>, DbErr> {
        let mut query = R::Entity::find();

        let projection = R::projection();
        if !projection.is_empty() {
            query = query.select_only().columns(projection);
        }

        for column in R::ordering() {
            query = query.order_by_asc(column);
        }

        query.into_model::<R::Row>().all(self.db).await
    }
}
