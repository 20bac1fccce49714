use anyhow::Result;
use cpf::config::{CONFIG_PATH_ENV, ServerConfig};
use cpf::logging::init_tracing;
use cpf::server::ServerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = ServerConfig::load(config_path.as_deref())?;

    init_tracing(&config.logging);
    if let Some(path) = &config_path {
        tracing::info!("Loaded configuration from {}", path);
    }

    ServerBuilder::new().with_config(config).serve().await
}
