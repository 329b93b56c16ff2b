use std::sync::Arc;

use anyhow::{Context, Result};
use data_ingestion::config::ServerConfig;
use data_ingestion::logger::init_logger;
use inference_server::engine::{InferenceEngine, LinearModel};
use inference_server::server::Server;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;
    info!("Configuration loaded: addr={}, model={}", addr, config.model_path.display());

    // A model that cannot be loaded is fatal; there is nothing to serve without it.
    let model = LinearModel::from_file(&config.model_path)
        .with_context(|| format!("loading model from {}", config.model_path.display()))?;
    let engine = InferenceEngine::new(Arc::new(model));

    let server = Server::init(engine);
    server.run(addr).await?;

    info!("Server has been shut down gracefully");

    Ok(())
}
