//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{AisTargetsTool, VesselSource};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    vessels: Arc<dyn VesselSource>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(vessels: Arc<dyn VesselSource>) -> Self {
        Self { vessels }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![AisTargetsTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![AisTargetsTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            AisTargetsTool::NAME => AisTargetsTool::http_handler(arguments, self.vessels.clone())
                .await
                .map_err(ToolError::invalid_arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::ais::targets::tests::FakeSource;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(FakeSource::with(vec![])))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(names, vec!["get_ais_targets"]);
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, AisTargetsTool::NAME);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_targets() {
        let result = test_registry()
            .call_tool(
                "get_ais_targets",
                serde_json::json!({ "latitude": 1.0, "longitude": 2.0, "radius": 3.0 }),
            )
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "No vessels found in the area.");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_negative_window() {
        let result = test_registry()
            .call_tool(
                "get_ais_targets",
                serde_json::json!({
                    "latitude": 1.0, "longitude": 2.0, "radius": 3.0, "start": -1, "count": 0
                }),
            )
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"].is_string());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_invalid_arguments() {
        let result = test_registry()
            .call_tool("get_ais_targets", serde_json::json!({ "latitude": "north" }))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = test_registry()
            .call_tool("unknown", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
