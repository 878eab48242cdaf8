use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Failed to convert row for display: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
