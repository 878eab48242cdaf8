use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database, execute a setup statement, or
    /// migrate the session store table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
