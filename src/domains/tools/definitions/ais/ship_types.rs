//! AIS ship-type codes.
//!
//! Only the codes the Saillogger feed is known to report are listed; any
//! other code renders as `Unknown`.

/// Label used for missing or unrecognized values.
pub const UNKNOWN: &str = "Unknown";

/// Ship-type code to display label, ordered by code.
pub const SHIP_TYPES: &[(i64, &str)] = &[
    (30, "Fishing Vessel"),
    (31, "Towing Vessel"),
    (32, "Towing vessel length > 200m"),
    (33, "Dredging/Underwater Operations"),
    (34, "Diving Operations"),
    (35, "Military Operations"),
    (36, "Sailing Vessel"),
    (37, "Pleasure Craft"),
    (40, "High Speed Craft"),
    (50, "Pilot Vessel"),
    (51, "Search and Rescue"),
    (52, "Tug"),
    (53, "Port Tender"),
    (54, "Anti-Pollution Equipment"),
    (55, "Law Enforcement"),
    (58, "Medical Transport"),
    (59, "Special Craft"),
    (60, "Passenger Ship"),
    (70, "Cargo Ship"),
    (71, "Tanker"),
    (72, "Hazardous Cargo Ship"),
    (80, "Commercial Ship"),
];

/// Look up a code, returning `None` when it is not in the table.
pub fn lookup(code: i64) -> Option<&'static str> {
    SHIP_TYPES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| SHIP_TYPES[idx].1)
}

/// Display label for an optional code.
pub fn ship_type_label(code: Option<i64>) -> &'static str {
    code.and_then(lookup).unwrap_or(UNKNOWN)
}
