//! Prompt service implementation.
//!
//! The PromptService owns the prompt catalog and handles discovery and
//! resolution. Validation and defaulting are driven by each spec's
//! ArgumentSpecs; rendering dispatches to the spec's render function.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::catalog::PromptSpec;
use super::error::PromptError;
use super::registry::get_all_prompts;
use crate::core::config::PromptsConfig;

/// Service for managing and instantiating prompts.
///
/// The catalog is populated once at construction and read-only afterwards,
/// so the service is safe to share across concurrent requests.
pub struct PromptService {
    /// Configuration for the prompts domain.
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Registered prompts, in catalog order.
    prompts: Vec<PromptSpec>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig) -> Self {
        info!("Initializing PromptService");

        let prompts = get_all_prompts();
        for spec in &prompts {
            info!("Registered prompt: {}", spec.name);
        }

        Self { config, prompts }
    }

    /// The registered prompt specs, in catalog order.
    ///
    /// Unlike the wire model, the specs carry the advertised argument
    /// defaults.
    pub fn specs(&self) -> &[PromptSpec] {
        &self.prompts
    }

    /// List all available prompts, in catalog order.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts.iter().map(PromptSpec::to_prompt).collect()
    }

    /// Resolve a prompt by name and render it with the given arguments.
    ///
    /// Fails with `UnknownPrompt` if the name is not in the catalog, or
    /// `MissingArgument` if a required argument is absent or empty. Extra
    /// argument keys are ignored.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let spec = self
            .prompts
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| PromptError::unknown_prompt(name))?;

        let arguments = arguments.unwrap_or_default();

        // Required arguments must be present and non-empty.
        for arg in &spec.arguments {
            if arg.required
                && arguments
                    .get(&arg.name)
                    .is_none_or(|value| value.is_empty())
            {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let text = (spec.render)(&arguments);

        Ok(GetPromptResult {
            description: spec.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
