//! Thin wrapper around the kubectl binary.
//!
//! All cluster access goes through this module. It spawns kubectl with the
//! configured context, captures output, and enforces a per-invocation
//! timeout. Output is returned as raw text and never interpreted here.

use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use super::config::KubectlConfig;

/// Result type for kubectl invocations.
pub type KubectlResult<T> = Result<T, KubectlError>;

/// Errors that can occur when invoking kubectl.
#[derive(Debug, Error)]
pub enum KubectlError {
    /// The kubectl binary could not be started.
    #[error("Failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// kubectl exited with a non-zero status.
    #[error("kubectl exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    /// The invocation exceeded the configured timeout.
    #[error("kubectl timed out after {0} seconds")]
    Timeout(u64),

    /// kubectl produced output that is not valid UTF-8.
    #[error("kubectl produced non-UTF-8 output")]
    InvalidOutput,
}

/// Executes kubectl commands with the configured binary, context, and
/// timeout.
#[derive(Debug, Clone)]
pub struct Kubectl {
    config: KubectlConfig,
}

impl Kubectl {
    /// Create a new kubectl invoker with the given configuration.
    pub fn new(config: KubectlConfig) -> Self {
        Self { config }
    }

    /// The full argument vector for an invocation, context flag included.
    pub fn build_args(&self, args: &[String]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(context) = &self.config.context {
            full.push("--context".to_string());
            full.push(context.clone());
        }
        full.extend(args.iter().cloned());
        full
    }

    /// Run kubectl with the given arguments and return its stdout as text.
    pub async fn run(&self, args: &[String]) -> KubectlResult<String> {
        let full_args = self.build_args(args);
        debug!("Running {} {}", self.config.binary, full_args.join(" "));

        let output = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            Command::new(&self.config.binary)
                .args(&full_args)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| KubectlError::Timeout(self.config.timeout_secs))?
        .map_err(|source| KubectlError::Spawn {
            binary: self.config.binary.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(KubectlError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| KubectlError::InvalidOutput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_args_without_context() {
        let kubectl = Kubectl::new(KubectlConfig::default());
        let args = kubectl.build_args(&strings(&["get", "pods"]));
        assert_eq!(args, strings(&["get", "pods"]));
    }

    #[test]
    fn test_build_args_with_context() {
        let kubectl = Kubectl::new(KubectlConfig {
            context: Some("staging".to_string()),
            ..KubectlConfig::default()
        });
        let args = kubectl.build_args(&strings(&["get", "pods"]));
        assert_eq!(args, strings(&["--context", "staging", "get", "pods"]));
    }

    #[tokio::test]
    async fn test_run_missing_binary() {
        let kubectl = Kubectl::new(KubectlConfig {
            binary: "/nonexistent/kubectl-test-binary".to_string(),
            ..KubectlConfig::default()
        });
        let result = kubectl.run(&strings(&["version"])).await;
        assert!(matches!(result, Err(KubectlError::Spawn { .. })));
    }
}
