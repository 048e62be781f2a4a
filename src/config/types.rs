// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Build-output configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// "dev" for a checkout run, "packaged" for a deployed install
    pub mode: String,
}

impl AssetsConfig {
    pub fn run_mode(&self) -> RunMode {
        match self.mode.as_str() {
            "dev" | "development" => RunMode::Dev,
            _ => RunMode::Packaged,
        }
    }
}

/// How the process was started; decides which build-root candidates apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Dev,
    Packaged,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_mode_parsing() {
        let assets = AssetsConfig {
            mode: "dev".to_string(),
        };
        assert_eq!(assets.run_mode(), RunMode::Dev);

        let assets = AssetsConfig {
            mode: "packaged".to_string(),
        };
        assert_eq!(assets.run_mode(), RunMode::Packaged);

        // Unknown values mean a deployed install
        let assets = AssetsConfig {
            mode: "staging".to_string(),
        };
        assert_eq!(assets.run_mode(), RunMode::Packaged);
    }
}
