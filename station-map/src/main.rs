use std::process::ExitCode;

use station_map::config::AppConfig;
use station_map::gateway::GatewayClient;
use station_map::map::Scene;
use station_map::session::{Controller, Session};
use station_map::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "station_map=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let client = GatewayClient::new(config.gateway.clone())?;
    info!(api = client.base_url(), "Using stations API");

    let controller = Controller::new(client, Session::new(Scene::new()));
    controller.bootstrap().await;
    let stations = controller.inspect(|s| s.stations().len()).await;
    info!(stations, "Initial station load finished");

    let app = create_router(AppState::new(controller), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("EV charging-station map listening on http://{}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
