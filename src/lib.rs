//! MCP server for nearby AIS vessel targets.
//!
//! Exposes the Saillogger vessel-tracking API as a single MCP tool,
//! `get_ais_targets`, which lists the vessels around a position as text.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the `ServerHandler` and the transports
//! - **domains**: what the server offers
//!   - **tools**: the AIS client, vessel decoding and report formatting
//!   - **resources**: the ship-type table and server info
//!
//! # Example
//!
//! ```rust,no_run
//! use ais_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
