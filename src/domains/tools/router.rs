//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them to their shared dependencies.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{AisTargetsTool, VesselSource};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(vessels: Arc<dyn VesselSource>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(AisTargetsTool::create_route(vessels))
}
