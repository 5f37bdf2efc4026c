use crate::cli::ServeArgs;
use crate::routes::router;
use gigradar::config::AppConfig;
use gigradar::error::AppError;
use gigradar::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let app = router();

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(?config.environment, %addr, "gig radar service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
