//! Kubernetes troubleshooting prompt definition.

use std::collections::HashMap;

use super::PromptDefinition;
use crate::domains::prompts::catalog::ArgumentSpec;

/// Namespace text substituted when the caller supplies no usable value.
/// This intentionally differs from the default advertised in the catalog.
const NAMESPACE_FALLBACK: &str = "monitoring";

/// A guided troubleshooting playbook for Kubernetes resources matching a
/// keyword.
pub struct TroubleshootPrompt;

impl PromptDefinition for TroubleshootPrompt {
    const NAME: &'static str = "k8s-troubleshoot";
    const DESCRIPTION: &'static str = "Troubleshoot Kubernetes resources based on a keyword.";

    fn arguments() -> Vec<ArgumentSpec> {
        vec![
            ArgumentSpec::required("keyword", "A keyword to search for in pod OR node names."),
            ArgumentSpec::optional(
                "namespace",
                "Optional: Specify a namespace to narrow down the search.",
                "all",
            ),
        ]
    }

    fn render(arguments: &HashMap<String, String>) -> String {
        let keyword = arguments
            .get("keyword")
            .map(String::as_str)
            .unwrap_or_default();
        let namespace = arguments
            .get("namespace")
            .map(String::as_str)
            .filter(|ns| !ns.is_empty())
            .unwrap_or(NAMESPACE_FALLBACK);

        format!(
            r#"Troubleshooting for resources (pods, nodes, etc.) containing keyword "{keyword}" in their names within namespace "{namespace}" (or across all namespaces if specified) for this investigation:

**Autonomous Kubernetes Troubleshooting Flow**

0. **Perform Quick Health Checks / Golden Signals Analysis**
   - Assess latency, errors, and resource utilization. If a clear issue is identified (e.g., node not ready, network partition), streamline or deprioritize subsequent detailed steps.

1. **Identify Resource Type and Scope**
   - Determine the specific resource type (e.g., Pod, Node, Deployment, Service) by analyzing labels, controller relationships, and initial observations.

2. **Assess Current State**
   - Check resource status (e.g., ready state, desired vs. current replicas for deployments).
   - Identify any non-running or unhealthy states (e.g., CrashLoopBackOff, NotReady, Pending, Evicted).
   - Review placement and distribution patterns across nodes.

3. **Analyze Operational History**
   - Review recent events and warnings related to the resource.
   - Check rollout history and update strategies for controllers (e.g., Deployments).
   - Examine recent configuration changes or applied manifests.

4. **Inspect Runtime Behavior**
   - Collect logs from current and previous instances for errors or anomalies (e.g., container logs for pods, system logs for nodes).
   - Test intra-cluster networking and DNS resolution.
   - Verify storage mounts, secret accessibility, and configuration usage.

5. **Evaluate Dependencies**
   - Validate references to ConfigMaps, Secrets, and other dependent resources.
   - Check associated service account permissions and RBAC rules.
   - Confirm initContainers and sidecar containers have completed successfully or are running as expected.

6. **Audit Resource Constraints**
   - Analyze CPU, memory, and storage usage trends against defined requests and limits.
   - Check node allocatable resources and capacity.
   - Review pod disruption budgets and quotas affecting the resource.

7. **Validate Cluster Context & Environment**
   - Inspect node readiness, taints, and tolerations.
   - Verify the current Kubernetes context and namespace.
   - Confirm API server availability and connectivity.
   - Check Kubernetes version compatibility (if applicable).

8. **Compare Against Patterns**
   - Benchmark against workload-specific best practices and known healthy configurations.
   - Verify liveness, readiness, and startup probe configurations.
   - Audit security context settings and network policies.

---

**Instructions:**
- For each finding, clearly state the observation, its severity (e.g., `CRITICAL`, `WARNING`, `INFO`), and the evidence (e.g., `kubectl output`, error message in POD_NAME, timestamp). Also, print which object they found symptoms, e.g., error message in POD_NAME.
- If there are more than 4 relevant resources (e.g., pods, nodes), pick up to 3 resources which are exhibiting the most severe or illustrative symptoms.
- If there's a typo in user input and a closest matching object name exists, consider an auto-correction or suggest the correct name.
- Summarize the root cause clearly and concisely at the end of the investigation, along with clear, actionable steps for remediation, including specific `kubectl` commands or configuration changes required.
- **Keep the output crisp, to the point, professional, direct, and systematic, avoiding verbose descriptions. Focus on actionable insights for engineers.**"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_troubleshoot_prompt_metadata() {
        assert_eq!(TroubleshootPrompt::NAME, "k8s-troubleshoot");
        assert!(!TroubleshootPrompt::DESCRIPTION.is_empty());

        let specs = TroubleshootPrompt::arguments();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "keyword");
        assert!(specs[0].required);
        assert_eq!(specs[0].default, None);
        assert_eq!(specs[1].name, "namespace");
        assert!(!specs[1].required);
        assert_eq!(specs[1].default.as_deref(), Some("all"));
    }

    #[test]
    fn test_render_without_namespace_uses_fallback() {
        let text = TroubleshootPrompt::render(&args(&[("keyword", "redis")]));
        assert!(text.contains(r#"keyword "redis""#));
        assert!(text.contains(r#"namespace "monitoring""#));
        assert!(!text.contains(r#"namespace "all""#));
    }

    #[test]
    fn test_render_with_empty_namespace_uses_fallback() {
        let text = TroubleshootPrompt::render(&args(&[("keyword", "redis"), ("namespace", "")]));
        assert!(text.contains(r#"namespace "monitoring""#));
    }

    #[test]
    fn test_render_with_explicit_namespace() {
        let text =
            TroubleshootPrompt::render(&args(&[("keyword", "redis"), ("namespace", "prod")]));
        assert!(text.contains(r#"keyword "redis""#));
        assert!(text.contains(r#"namespace "prod""#));
    }

    #[test]
    fn test_render_covers_every_checklist_section() {
        let text = TroubleshootPrompt::render(&args(&[("keyword", "redis")]));
        for section in [
            "Golden Signals Analysis",
            "Identify Resource Type and Scope",
            "Assess Current State",
            "Analyze Operational History",
            "Inspect Runtime Behavior",
            "Evaluate Dependencies",
            "Audit Resource Constraints",
            "Validate Cluster Context & Environment",
            "Compare Against Patterns",
            "**Instructions:**",
        ] {
            assert!(text.contains(section), "missing section: {}", section);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = args(&[("keyword", "redis"), ("namespace", "prod")]);
        assert_eq!(
            TroubleshootPrompt::render(&input),
            TroubleshootPrompt::render(&input)
        );
    }
}
