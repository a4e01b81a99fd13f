//! The fixed set of resources and templates this server publishes.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{ResourceDefinition, ServerInfoResource, ShipTypesResource};
use super::service::ResourceEntry;

fn entry<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Every concrete resource, keyed later by URI in the service.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![entry::<ShipTypesResource>(), entry::<ServerInfoResource>()]
}

/// Parameterized resources (RFC 6570 URI templates).
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: ShipTypesResource::URI_TEMPLATE.to_string(),
            name: "AIS Ship Type".to_string(),
            title: Some("Look up an AIS ship-type code".to_string()),
            description: Some(
                "Label of a single AIS ship-type code, e.g. ais://ship-types/70".to_string(),
            ),
            mime_type: Some(ShipTypesResource::MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}
