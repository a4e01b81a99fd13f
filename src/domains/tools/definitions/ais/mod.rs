//! AIS tools module.
//!
//! Tools backed by the Saillogger vessel-tracking API:
//! - `client`: HTTP access to the `/vessels/` endpoint
//! - `vessel`: lenient decoding of untrusted vessel records
//! - `ship_types`: static AIS ship-type code table
//! - `format`: text rendering of vessels and paginated reports
//! - `targets`: the `get_ais_targets` tool

pub mod client;
pub mod error;
pub mod format;
pub mod ship_types;
pub mod targets;
pub mod vessel;

pub use client::{AisClient, VesselSource};
pub use error::AisError;
pub use ship_types::{SHIP_TYPES, ship_type_label};
pub use targets::{AisTargetsParams, AisTargetsTool};
pub use vessel::Vessel;
