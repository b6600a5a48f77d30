//! Tool definitions module.
//!
//! Each tool is implemented in its own file under `kubectl/`, following the
//! same structure: a params struct, a pure argument builder, and an execute
//! method that runs kubectl and wraps the output.

pub mod kubectl;

pub use kubectl::{KubectlDescribeTool, KubectlListTool, KubectlLogsTool};
