use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

async fn check() -> Result<(), data_check::error::CheckError> {
    let database_url = data_check::database_url()?;
    let db = data_check::connect(&database_url).await?;

    tracing::info!("Connected to database");

    let stdout = std::io::stdout();
    data_check::run(&db, &mut stdout.lock()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match check().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Data check failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
