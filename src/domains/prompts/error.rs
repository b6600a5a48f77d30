//! Prompt-specific error types.

use thiserror::Error;

/// Errors that can occur during prompt operations.
///
/// Both variants are terminal for the call: rendering either fully succeeds
/// or fails before producing any text.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested prompt is not in the catalog.
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    /// A required argument has no resolvable value.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

impl PromptError {
    /// Create a new "unknown prompt" error.
    pub fn unknown_prompt(name: impl Into<String>) -> Self {
        Self::UnknownPrompt(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }
}
