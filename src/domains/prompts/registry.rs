//! Prompt Registry - central registration of all prompts.
//!
//! This module provides dynamic prompt registration without modifying service.rs.
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::catalog::PromptSpec;
use super::definitions::{PromptDefinition, TroubleshootPrompt};

/// Build a PromptSpec from a PromptDefinition.
fn build_spec<P: PromptDefinition>() -> PromptSpec {
    PromptSpec {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        render: P::render,
    }
}

/// Get all registered prompts as PromptSpecs, in catalog order.
///
/// This is the central place where all prompts are registered.
/// When adding a new prompt, add it here.
pub fn get_all_prompts() -> Vec<PromptSpec> {
    vec![build_spec::<TroubleshootPrompt>()]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![TroubleshootPrompt::NAME]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 1);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"k8s-troubleshoot"));
    }

    #[test]
    fn test_prompt_names() {
        let names = prompt_names();
        assert_eq!(names.len(), 1);
        assert!(names.contains(&"k8s-troubleshoot"));
    }

    #[test]
    fn test_specs_carry_descriptions() {
        for spec in get_all_prompts() {
            assert!(spec.description.as_deref().is_some_and(|d| !d.is_empty()));
        }
    }
}
