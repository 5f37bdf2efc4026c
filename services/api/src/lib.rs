mod cli;
mod recommend;
mod routes;
mod search;
mod server;

use gigradar::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
