//! List resources tool definition.
//!
//! A tool that lists Kubernetes resources of a given type via `kubectl get`.

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

use super::common::{namespace_scope, run_to_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KubectlListParams {
    /// Resource type to list (e.g. "pods", "nodes", "deployments").
    pub resource_type: String,

    /// Namespace to search. Omit or pass "all" to search every namespace.
    pub namespace: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List tool - lists Kubernetes resources of a given type.
pub struct KubectlListTool;

impl KubectlListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "kubectl_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List Kubernetes resources of a given type (e.g. pods, nodes, deployments). Returns the raw wide-format kubectl output.";

    /// Build the kubectl argument vector for these parameters.
    pub fn command_args(params: &KubectlListParams) -> Vec<String> {
        let mut args = vec![
            "get".to_string(),
            params.resource_type.clone(),
            "-o".to_string(),
            "wide".to_string(),
        ];
        args.extend(namespace_scope(params.namespace.as_deref()));
        args
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(resource_type = %params.resource_type))]
    pub async fn execute(params: &KubectlListParams, kubectl: &Kubectl) -> CallToolResult {
        info!("List tool called for resource type: {}", params.resource_type);
        run_to_result(kubectl, Self::command_args(params)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<KubectlListParams>(),
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
                let params: KubectlListParams =
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
    use crate::core::config::KubectlConfig;

    #[test]
    fn test_command_args_all_namespaces() {
        let params = KubectlListParams {
            resource_type: "pods".to_string(),
            namespace: None,
        };
        assert_eq!(
            KubectlListTool::command_args(&params),
            vec!["get", "pods", "-o", "wide", "--all-namespaces"]
        );
    }

    #[test]
    fn test_command_args_scoped_namespace() {
        let params = KubectlListParams {
            resource_type: "deployments".to_string(),
            namespace: Some("prod".to_string()),
        };
        assert_eq!(
            KubectlListTool::command_args(&params),
            vec!["get", "deployments", "-o", "wide", "-n", "prod"]
        );
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = KubectlListTool::to_tool();
        assert_eq!(tool.name, KubectlListTool::NAME);
        assert!(tool.description.is_some());
    }

    #[tokio::test]
    async fn test_execute_missing_binary_is_error_result() {
        let params = KubectlListParams {
            resource_type: "pods".to_string(),
            namespace: None,
        };
        let kubectl = Kubectl::new(KubectlConfig {
            binary: "/nonexistent/kubectl-test-binary".to_string(),
            ..KubectlConfig::default()
        });
        let result = KubectlListTool::execute(&params, &kubectl).await;
        assert!(result.is_error.unwrap_or(false));
    }
}
