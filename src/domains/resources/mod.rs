//! Resources domain: read-only data clients can fetch alongside the tool.
//!
//! - `ais://ship-types` and the `ais://ship-types/{code}` template
//! - `mcp://server/info`, built from the running configuration

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
