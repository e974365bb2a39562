use taskboard::config::AppConfig;
use taskboard::server::ServerBuilder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Path of an optional YAML configuration file
const CONFIG_ENV: &str = "TASKBOARD_CONFIG";
/// Overrides `server.bind` from the configuration
const BIND_ENV: &str = "TASKBOARD_BIND";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskboard=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_yaml_file(&path)?
        }
        Err(_) => AppConfig::default_config(),
    };

    if let Ok(bind) = std::env::var(BIND_ENV) {
        config.server.bind = bind;
    }

    let addr = config.server.bind.clone();
    tracing::info!(
        page_size = config.listing.page_size,
        cors = config.server.cors_permissive,
        "Starting taskboard"
    );

    ServerBuilder::new().with_config(config).serve(&addr).await
}
