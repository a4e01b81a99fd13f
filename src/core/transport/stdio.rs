//! STDIO transport, the mode desktop MCP clients launch the server in.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session on stdin/stdout until the client closes it.
    ///
    /// Logs must go to stderr while this runs.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let session = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;
        info!("Ready - communicating via stdin/stdout");

        let reason = session
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO session closed: {:?}", reason);
        Ok(())
    }
}
