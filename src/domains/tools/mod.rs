//! Tools domain: the AIS vessel lookup and the plumbing that exposes it.
//!
//! - `definitions/ais/` - client, vessel decoding, report formatting and the tool itself
//! - `router.rs` - rmcp `ToolRouter` used by the STDIO and TCP transports
//! - `registry.rs` - tool metadata and HTTP dispatch
//!
//! A new tool needs a route in `router.rs` and an arm in `ToolRegistry::call_tool`,
//! otherwise it is missing from one of the transports.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
