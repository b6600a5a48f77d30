//! MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server for Kubernetes
//! troubleshooting, with a modular architecture organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the kubectl wrapper, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Read-only kubectl inspection tools (list, describe, logs)
//!   - **prompts**: Prompt templates for guided troubleshooting
//!
//! # Example
//!
//! ```rust,no_run
//! use k8s_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
