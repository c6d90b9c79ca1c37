mod cli;
mod infra;
mod offline;
mod routes;
mod server;

use visa_ai::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
