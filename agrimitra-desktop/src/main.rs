use agrimitra_desktop_lib::app::{AppBootstrap, bootstrap};
use agrimitra_desktop_lib::{console, logging};
use agrimitra_infrastructure::ConfigService;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional first argument: path to a config.toml.
    let config_service = match std::env::args().nth(1) {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config();
    let _log_guard = logging::init_logging(&config.logging);

    tracing::info!("[Main] AgriMitra {} starting", env!("CARGO_PKG_VERSION"));

    let AppBootstrap { app_state, notices } = bootstrap(config_service).await;
    console::run(app_state, notices, BufReader::new(tokio::io::stdin())).await
}
