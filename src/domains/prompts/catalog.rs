//! Prompt catalog types.
//!
//! This module contains the PromptSpec and ArgumentSpec structs that make up
//! the static prompt catalog, plus the conversion into the rmcp wire model.

use rmcp::model::{Prompt, PromptArgument};
use std::collections::HashMap;

/// Rendering function for a prompt.
///
/// Receives the caller-supplied arguments (already validated against the
/// spec's required arguments) and produces the final message text.
pub type RenderFn = fn(&HashMap<String, String>) -> String;

/// Declared argument of a prompt.
///
/// Only optional arguments may carry an advertised default; the constructors
/// enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// The argument name as supplied by callers.
    pub name: String,

    /// A description of the argument shown to clients.
    pub description: String,

    /// Whether the argument must be supplied (and non-empty).
    pub required: bool,

    /// The default value advertised during discovery, if any.
    pub default: Option<String>,
}

impl ArgumentSpec {
    /// Create a required argument. Required arguments never carry a default.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            default: None,
        }
    }

    /// Create an optional argument with an advertised default value.
    pub fn optional(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            default: Some(default.into()),
        }
    }

    /// Convert to the rmcp wire model.
    ///
    /// Note: rmcp's `PromptArgument` has no default field, so the advertised
    /// default only exists at the catalog level.
    pub fn to_prompt_argument(&self) -> PromptArgument {
        PromptArgument {
            name: self.name.clone(),
            title: None,
            description: Some(self.description.clone()),
            required: Some(self.required),
        }
    }
}

/// A registered prompt: discovery metadata plus its rendering function.
///
/// Specs are built once at startup by the registry and are immutable for the
/// process lifetime. Rendering is a pure function of the arguments, so a
/// spec can be shared freely across concurrent requests.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments this prompt accepts, in declaration order.
    pub arguments: Vec<ArgumentSpec>,

    /// Produces the message text from validated arguments.
    pub render: RenderFn,
}

impl PromptSpec {
    /// Convert to the rmcp wire model for `prompts/list`.
    pub fn to_prompt(&self) -> Prompt {
        Prompt {
            name: self.name.clone(),
            title: None,
            description: self.description.clone(),
            arguments: Some(
                self.arguments
                    .iter()
                    .map(ArgumentSpec::to_prompt_argument)
                    .collect(),
            ),
            icons: None,
            meta: None,
        }
    }
}
