//! Describe resource tool definition.
//!
//! A tool that shows the detailed state of a single Kubernetes resource via
//! `kubectl describe`.

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

/// Parameters for the describe tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KubectlDescribeParams {
    /// Resource type (e.g. "pod", "node", "deployment").
    pub resource_type: String,

    /// Name of the resource to describe.
    pub name: String,

    /// Namespace of the resource. Omit for the current namespace.
    pub namespace: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Describe tool - shows events, status, and configuration of one resource.
pub struct KubectlDescribeTool;

impl KubectlDescribeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "kubectl_describe";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Describe a single Kubernetes resource, including status, spec, and recent events. Returns the raw kubectl output.";

    /// Build the kubectl argument vector for these parameters.
    pub fn command_args(params: &KubectlDescribeParams) -> Vec<String> {
        let mut args = vec![
            "describe".to_string(),
            params.resource_type.clone(),
            params.name.clone(),
        ];
        args.extend(namespace_flag(params.namespace.as_deref()));
        args
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(resource_type = %params.resource_type, name = %params.name))]
    pub async fn execute(params: &KubectlDescribeParams, kubectl: &Kubectl) -> CallToolResult {
        info!(
            "Describe tool called for {} {}",
            params.resource_type, params.name
        );
        run_to_result(kubectl, Self::command_args(params)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<KubectlDescribeParams>(),
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
                let params: KubectlDescribeParams =
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
    fn test_command_args_current_namespace() {
        let params = KubectlDescribeParams {
            resource_type: "node".to_string(),
            name: "worker-1".to_string(),
            namespace: None,
        };
        assert_eq!(
            KubectlDescribeTool::command_args(&params),
            vec!["describe", "node", "worker-1"]
        );
    }

    #[test]
    fn test_command_args_scoped_namespace() {
        let params = KubectlDescribeParams {
            resource_type: "pod".to_string(),
            name: "redis-0".to_string(),
            namespace: Some("monitoring".to_string()),
        };
        assert_eq!(
            KubectlDescribeTool::command_args(&params),
            vec!["describe", "pod", "redis-0", "-n", "monitoring"]
        );
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = KubectlDescribeTool::to_tool();
        assert_eq!(tool.name, KubectlDescribeTool::NAME);
        assert!(tool.description.is_some());
    }
}
