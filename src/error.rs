use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("pipeline error: {0}")]
    Pipeline(#[from] RegistryError),
}
