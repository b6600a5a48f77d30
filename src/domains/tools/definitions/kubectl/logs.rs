//! Pod logs tool definition.
//!
//! A tool that fetches container logs from a pod via `kubectl logs`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::core::Kubectl;

use super::common::{namespace_flag, run_to_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the logs tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KubectlLogsParams {
    /// Name of the pod.
    pub name: String,

    /// Namespace of the pod. Omit for the current namespace.
    pub namespace: Option<String>,

    /// Container to read from. Omit for the only/default container.
    pub container: Option<String>,

    /// Read logs from the previous instance of the container.
    #[serde(default)]
    pub previous: bool,

    /// Limit output to the last N lines.
    pub tail: Option<u64>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Logs tool - fetches container logs from a pod.
pub struct KubectlLogsTool;

impl KubectlLogsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "kubectl_logs";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch container logs from a pod, optionally from the previous instance or limited to the last N lines. Returns the raw log text.";

    /// Build the kubectl argument vector for these parameters.
    pub fn command_args(params: &KubectlLogsParams) -> Vec<String> {
        let mut args = vec!["logs".to_string(), params.name.clone()];
        args.extend(namespace_flag(params.namespace.as_deref()));
        if let Some(container) = &params.container {
            args.push("-c".to_string());
            args.push(container.clone());
        }
        if params.previous {
            args.push("--previous".to_string());
        }
        if let Some(tail) = params.tail {
            args.push("--tail".to_string());
            args.push(tail.to_string());
        }
        args
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &KubectlLogsParams, kubectl: &Kubectl) -> CallToolResult {
        info!("Logs tool called for pod: {}", params.name);
        run_to_result(kubectl, Self::command_args(params)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<KubectlLogsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: KubectlLogsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let kubectl = Kubectl::new(config.kubectl.clone());
                Ok(Self::execute(&params, &kubectl).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args_minimal() {
        let params = KubectlLogsParams {
            name: "redis-0".to_string(),
            namespace: None,
            container: None,
            previous: false,
            tail: None,
        };
        assert_eq!(
            KubectlLogsTool::command_args(&params),
            vec!["logs", "redis-0"]
        );
    }

    #[test]
    fn test_command_args_full() {
        let params = KubectlLogsParams {
            name: "redis-0".to_string(),
            namespace: Some("monitoring".to_string()),
            container: Some("redis".to_string()),
            previous: true,
            tail: Some(200),
        };
        assert_eq!(
            KubectlLogsTool::command_args(&params),
            vec![
                "logs",
                "redis-0",
                "-n",
                "monitoring",
                "-c",
                "redis",
                "--previous",
                "--tail",
                "200"
            ]
        );
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = KubectlLogsTool::to_tool();
        assert_eq!(tool.name, KubectlLogsTool::NAME);
        assert!(tool.description.is_some());
    }
}
