mod cli;
mod infra;
mod routes;
mod screen;
mod server;

use applicant_screening::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
