//! Domain logic exposed over MCP.
//!
//! - **tools**: `get_ais_targets`, the vessel lookup
//! - **resources**: the ship-type table and server info

pub mod resources;
pub mod tools;
