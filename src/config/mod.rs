use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_REGISTRY_PATH: &str = "data/MDB_STAMMDATEN.xml";
const DEFAULT_PROFESSIONS_PATH: &str = "data/combined_professions.csv";
const DEFAULT_OUTPUT_PATH: &str = "output/mp-list-professions.csv";
const DEFAULT_VARIABILITY_PATH: &str = "output/mp-key-variability.csv";

/// Top-level configuration for a flattening run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let pipeline = PipelineConfig {
            registry_path: path_var("MDB_REGISTRY_PATH", DEFAULT_REGISTRY_PATH)?,
            professions_path: path_var("MDB_PROFESSIONS_PATH", DEFAULT_PROFESSIONS_PATH)?,
            output_path: path_var("MDB_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?,
            variability_path: path_var("MDB_VARIABILITY_PATH", DEFAULT_VARIABILITY_PATH)?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            pipeline,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(var: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { var }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Input and output locations for the registry pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub registry_path: PathBuf,
    pub professions_path: PathBuf,
    pub output_path: PathBuf,
    pub variability_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            professions_path: PathBuf::from(DEFAULT_PROFESSIONS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            variability_path: PathBuf::from(DEFAULT_VARIABILITY_PATH),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is set but empty; unset it to use the default location")]
    EmptyPath { var: &'static str },
}
