use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::driver::DriverConfig;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Emit per-invocation `INVOKE` events
    #[serde(default)]
    pub enable_tracing: bool,
    pub gateway: GatewayConfig,
    /// Warm-up / averaging for `--invoke` runs
    #[serde(default)]
    pub driver: DriverConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_deserialize() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: crypto_bench.log
use_json: true
rotation: hourly
enable_tracing: true
gateway:
  host: 127.0.0.1
  port: 8080
driver:
  warm_up_count: 1
  average: 10
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        assert!(config.enable_tracing);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.driver.average, 10);
    }

    #[test]
    fn test_optional_sections_default() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: crypto_bench.log
use_json: false
rotation: never
gateway:
  host: 0.0.0.0
  port: 5000
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert!(!config.enable_tracing);
        assert_eq!(config.driver, DriverConfig::default());
    }

    #[test]
    fn test_missing_gateway_is_error() {
        let yaml = "log_level: info\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AppConfig::load("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("config/does-not-exist.yaml"));
    }
}
