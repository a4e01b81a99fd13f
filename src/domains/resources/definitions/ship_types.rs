//! AIS ship-type table resources.
//!
//! `ais://ship-types` returns the whole table; `ais://ship-types/{code}`
//! (a resource template) returns a single entry.

use super::ResourceDefinition;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::ais::ship_types::{SHIP_TYPES, lookup};

/// The ship-type code table (static JSON).
pub struct ShipTypesResource;

impl ShipTypesResource {
    /// URI template for single-code lookups.
    pub const URI_TEMPLATE: &'static str = "ais://ship-types/{code}";

    const CODE_PREFIX: &'static str = "ais://ship-types/";

    /// Resolve `ais://ship-types/{code}`. Returns `Ok(None)` for URIs
    /// outside the template.
    pub fn resolve_code(uri: &str) -> Result<Option<String>, ResourceError> {
        let Some(raw_code) = uri.strip_prefix(Self::CODE_PREFIX) else {
            return Ok(None);
        };

        let code: i64 = raw_code
            .parse()
            .map_err(|_| ResourceError::invalid_uri(uri))?;
        let label = lookup(code).ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(Some(
            serde_json::json!({ "code": code, "label": label }).to_string(),
        ))
    }
}

impl ResourceDefinition for ShipTypesResource {
    const URI: &'static str = "ais://ship-types";
    const NAME: &'static str = "AIS Ship Types";
    const DESCRIPTION: &'static str =
        "AIS ship-type codes and the labels used when rendering vessel reports";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        let entries: Vec<_> = SHIP_TYPES
            .iter()
            .map(|(code, label)| serde_json::json!({ "code": code, "label": label }))
            .collect();
        ResourceContent::Text(serde_json::Value::Array(entries).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_types_content() {
        let ResourceContent::Text(text) = ShipTypesResource::content() else {
            panic!("Expected Text content");
        };
        let table: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entries = table.as_array().unwrap();
        assert_eq!(entries.len(), SHIP_TYPES.len());
        assert_eq!(entries[0]["code"], 30);
        assert_eq!(entries[0]["label"], "Fishing Vessel");
    }

    #[test]
    fn test_resolve_code() {
        let body = ShipTypesResource::resolve_code("ais://ship-types/52")
            .unwrap()
            .unwrap();
        let entry: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(entry["label"], "Tug");
    }

    #[test]
    fn test_resolve_code_errors() {
        assert!(matches!(
            ShipTypesResource::resolve_code("ais://ship-types/99"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(matches!(
            ShipTypesResource::resolve_code("ais://ship-types/tug"),
            Err(ResourceError::InvalidUri(_))
        ));
        assert!(matches!(
            ShipTypesResource::resolve_code("mcp://server/info"),
            Ok(None)
        ));
    }
}
