//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are read-only Kubernetes inspection commands that MCP clients can
//! call; each one shells out to kubectl and returns the raw output.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/kubectl/` (e.g., `my_tool.rs`)
//! 2. Define params, command_args(), and execute()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
