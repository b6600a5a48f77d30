//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// kubectl invocation configuration.
    pub kubectl: KubectlConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
    // Add prompt-specific configuration here if needed.
}

/// Configuration for invoking kubectl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubectlConfig {
    /// Path to the kubectl binary.
    pub binary: String,

    /// Kubeconfig context to use. None means the current context.
    pub context: Option<String>,

    /// Timeout in seconds for a single kubectl invocation.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for KubectlConfig {
    fn default() -> Self {
        Self {
            binary: "kubectl".to_string(),
            context: None,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "k8s-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            prompts: PromptsConfig::default(),
            kubectl: KubectlConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_KUBECTL_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(binary) = std::env::var("MCP_KUBECTL_PATH") {
            info!("Using kubectl binary from environment: {}", binary);
            config.kubectl.binary = binary;
        }

        if let Ok(context) = std::env::var("MCP_KUBE_CONTEXT") {
            info!("Using kubeconfig context: {}", context);
            config.kubectl.context = Some(context);
        }

        if let Ok(timeout) = std::env::var("MCP_KUBECTL_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => config.kubectl.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_KUBECTL_TIMEOUT value: {} (expected seconds)",
                    timeout
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_kubectl_defaults() {
        let config = Config::default();
        assert_eq!(config.kubectl.binary, "kubectl");
        assert_eq!(config.kubectl.context, None);
        assert_eq!(config.kubectl.timeout_secs, 30);
    }

    #[test]
    fn test_kubectl_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_KUBECTL_PATH", "/usr/local/bin/kubectl");
            std::env::set_var("MCP_KUBE_CONTEXT", "staging");
        }
        let config = Config::from_env();
        assert_eq!(config.kubectl.binary, "/usr/local/bin/kubectl");
        assert_eq!(config.kubectl.context.as_deref(), Some("staging"));
        unsafe {
            std::env::remove_var("MCP_KUBECTL_PATH");
            std::env::remove_var("MCP_KUBE_CONTEXT");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_KUBECTL_TIMEOUT", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.kubectl.timeout_secs, 30);
        unsafe {
            std::env::remove_var("MCP_KUBECTL_TIMEOUT");
        }
    }
}
