//! Server info resource definition.

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server and its AIS data source";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl ServerInfoResource {
    /// Render the server description for the given configuration.
    pub fn resolve(config: &Config) -> serde_json::Value {
        let tools: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name)
            .collect();

        serde_json::json!({
            "server": config.server.name,
            "version": config.server.version,
            "transport": config.transport.description(),
            "tools": tools,
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "ais": {
                "base_url": config.ais.base_url,
                "user_agent": config.ais.user_agent,
                "timeout_secs": config.ais.timeout_secs,
            },
        })
    }
}
