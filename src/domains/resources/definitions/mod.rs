//! Resource definitions, one per file.

pub mod server_info;
pub mod ship_types;

pub use server_info::ServerInfoResource;
pub use ship_types::ShipTypesResource;

use super::service::ResourceContent;

/// Metadata and content of a resource with a fixed URI.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
