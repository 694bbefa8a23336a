use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Path to the curated document JSON file
    pub data_file: PathBuf,
    /// Directory for the append-only interaction log
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            data_file: PathBuf::from("curated_data.json"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("LACE_CHAT_BIND_ADDR") {
            config.bind_addr = addr;
        } else if let Ok(port) = std::env::var("PORT") {
            // Bare PORT is honored for parity with common PaaS setups.
            if let Ok(p) = port.parse::<u16>() {
                config.bind_addr = format!("0.0.0.0:{p}");
            }
        }
        if let Ok(path) = std::env::var("LACE_CHAT_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("LACE_CHAT_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.data_file, PathBuf::from("curated_data.json"));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }
}
