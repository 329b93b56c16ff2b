use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::IngestionError;

pub const DEFAULT_MODEL_PATH: &str = "artifacts/models/RidgeCV_logtarget.json";
const CONFIG_FILE: &str = "liquidity.toml";
const ENV_PREFIX: &str = "LIQUIDITY";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub model_path: PathBuf,
}

impl ServerConfig {
    /// Defaults, then `liquidity.toml` if present, then `LIQUIDITY_*` variables.
    pub fn from_env() -> Result<Self, IngestionError> {
        let _ = dotenvy::dotenv();
        Self::from_file(CONFIG_FILE)
    }

    pub fn from_file(path: &str) -> Result<Self, IngestionError> {
        let cfg = Config::builder()
            .set_default("bind_addr", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("model_path", DEFAULT_MODEL_PATH)?
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, IngestionError> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .map_err(|_| IngestionError::InvalidBindAddress(self.bind_addr.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
