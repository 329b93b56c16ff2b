use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
}
