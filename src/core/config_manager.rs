// src/core/config_manager.rs
//! Unified configuration management - all settings come from the environment

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_LOG_PATH: &str = "/tmp/hiresense.log";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub analysis_api_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_path: PathBuf,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let service = Self::load_service()?;
        let logging = Self::load_logging()?;

        Ok(Self { service, logging })
    }

    fn load_service() -> Result<ServiceConfig> {
        let analysis_api_url =
            std::env::var("HIRESENSE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if analysis_api_url.trim().is_empty() {
            anyhow::bail!("HIRESENSE_API_URL must not be empty");
        }

        info!("Analysis service endpoint: {}", analysis_api_url);

        Ok(ServiceConfig { analysis_api_url })
    }

    fn load_logging() -> Result<LoggingConfig> {
        let log_path = std::env::var("HIRESENSE_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH));

        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
        }

        Ok(LoggingConfig { log_path })
    }
}
