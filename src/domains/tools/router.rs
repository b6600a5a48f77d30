//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{KubectlDescribeTool, KubectlListTool, KubectlLogsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(KubectlDescribeTool::create_route(config.clone()))
        .with_route(KubectlListTool::create_route(config.clone()))
        .with_route(KubectlLogsTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"kubectl_describe"));
        assert!(names.contains(&"kubectl_list"));
        assert!(names.contains(&"kubectl_logs"));
    }

    #[test]
    fn test_router_tools_have_schemas() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
        }
    }
}
