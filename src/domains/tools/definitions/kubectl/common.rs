//! Common utilities shared across kubectl tools.
//!
//! This module provides namespace flag handling and result wrapping helpers
//! used by every kubectl tool.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::core::Kubectl;

/// Namespace value that means "search every namespace".
pub const ALL_NAMESPACES: &str = "all";

/// Namespace flags for namespaced listing commands.
///
/// A missing, empty, or `"all"` namespace widens the command to every
/// namespace; anything else scopes it with `-n`.
pub fn namespace_scope(namespace: Option<&str>) -> Vec<String> {
    match namespace {
        Some(ns) if !ns.is_empty() && ns != ALL_NAMESPACES => {
            vec!["-n".to_string(), ns.to_string()]
        }
        _ => vec!["--all-namespaces".to_string()],
    }
}

/// Namespace flags for commands that address a single object.
///
/// `describe` and `logs` cannot span namespaces, so a missing or empty value
/// falls back to the current namespace.
pub fn namespace_flag(namespace: Option<&str>) -> Vec<String> {
    match namespace {
        Some(ns) if !ns.is_empty() => vec!["-n".to_string(), ns.to_string()],
        _ => Vec::new(),
    }
}

/// Run kubectl with the given arguments and wrap the outcome as a tool
/// result. Output is passed through verbatim; failures carry the kubectl
/// error text.
pub async fn run_to_result(kubectl: &Kubectl, args: Vec<String>) -> CallToolResult {
    match kubectl.run(&args).await {
        Ok(output) => CallToolResult::success(vec![Content::text(output)]),
        Err(e) => {
            warn!("kubectl invocation failed: {}", e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_scope_defaults_to_all_namespaces() {
        assert_eq!(namespace_scope(None), vec!["--all-namespaces"]);
        assert_eq!(namespace_scope(Some("")), vec!["--all-namespaces"]);
        assert_eq!(namespace_scope(Some("all")), vec!["--all-namespaces"]);
    }

    #[test]
    fn test_namespace_scope_with_explicit_namespace() {
        assert_eq!(namespace_scope(Some("prod")), vec!["-n", "prod"]);
    }

    #[test]
    fn test_namespace_flag() {
        assert!(namespace_flag(None).is_empty());
        assert!(namespace_flag(Some("")).is_empty());
        assert_eq!(namespace_flag(Some("prod")), vec!["-n", "prod"]);
    }
}
