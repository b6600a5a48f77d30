//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the kubectl wrapper, server
//! lifecycle management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod kubectl;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use kubectl::{Kubectl, KubectlError};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
