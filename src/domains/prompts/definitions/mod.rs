//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - A rendering function
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

use std::collections::HashMap;

use super::catalog::ArgumentSpec;

mod troubleshoot;

pub use troubleshoot::TroubleshootPrompt;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and
/// rendering function.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The arguments this prompt accepts, in declaration order.
    fn arguments() -> Vec<ArgumentSpec>;

    /// Render the message text from validated arguments.
    ///
    /// Required arguments are guaranteed present and non-empty by the
    /// service; optional arguments may be missing or empty.
    fn render(arguments: &HashMap<String, String>) -> String;
}
