//! Text rendering for AIS targets.
//!
//! Rendering is a pure projection of the fetched records: nothing is
//! validated or escaped, and every missing value prints as `Unknown`.
//! Query coordinates print like floats (`5.0`), vessel values exactly as
//! the feed spelled them.

use std::fmt::Display;

use super::ship_types::{UNKNOWN, ship_type_label};
use super::vessel::Vessel;

/// Returned when the upstream lookup fails for any reason.
pub const FETCH_FAILED: &str = "Unable to retrieve AIS targets for this position.";

/// Returned when the lookup succeeds but the area is empty.
pub const NO_VESSELS: &str = "No vessels found in the area.";

/// Default page size.
pub const DEFAULT_COUNT: i64 = 25;

/// Advisory radius cap of the upstream API, in nautical miles.
pub const MAX_RADIUS_NM: f64 = 10.0;

/// A single targets lookup with its page window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_nm: f64,
    /// 1-based index of the first vessel to render.
    pub start: usize,
    /// Maximum number of vessels to render.
    pub count: usize,
}

impl TargetQuery {
    /// Create a query, clamping `start` and `count` to at least 1.
    pub fn new(latitude: f64, longitude: f64, radius_nm: f64, start: i64, count: i64) -> Self {
        Self {
            latitude,
            longitude,
            radius_nm,
            start: window_bound(start),
            count: window_bound(count),
        }
    }

    /// 1-based index of the first vessel after this page.
    pub fn next_start(&self) -> usize {
        self.start.saturating_add(self.count)
    }
}

fn window_bound(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

fn or_unknown<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Render one vessel as a fixed six-line block.
pub fn format_vessel(vessel: &Vessel) -> String {
    format!(
        "\nName: {}\nType: {}\nMMSI: {}\nCoordinates: {}, {}\nCourse Over Ground: {}\nSpeed: {}\n",
        or_unknown(vessel.name.as_deref()),
        ship_type_label(vessel.ship_type),
        or_unknown(vessel.mmsi.as_deref()),
        or_unknown(vessel.latitude.as_ref()),
        or_unknown(vessel.longitude.as_ref()),
        or_unknown(vessel.course_over_ground.as_ref()),
        or_unknown(vessel.speed_over_ground.as_ref()),
    )
}

/// Render a page of vessels for a successful lookup.
///
/// Vessels are numbered from 1 within the page, whatever `start` is. A
/// `start` past the end renders the header only.
pub fn render_report(query: &TargetQuery, vessels: &[Vessel]) -> String {
    if vessels.is_empty() {
        return NO_VESSELS.to_string();
    }

    let mut report = format!(
        "Found {} vessels in the area:\nLatitude: {:?}, Longitude: {:?}, Radius: {:?} nautical miles\nVessels:\n",
        vessels.len(),
        query.latitude,
        query.longitude,
        query.radius_nm
    );

    let page = vessels.iter().skip(query.start - 1).take(query.count);
    for (idx, vessel) in page.enumerate() {
        report.push_str(&format!("Vessel {}:\n", idx + 1));
        report.push_str(&format_vessel(vessel));
    }

    let next = query.next_start();
    if next <= vessels.len() {
        report.push_str(&format!(
            "\nI will stop providing details here.But you can ask for more, just start the page from {}.\n",
            next
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str) -> serde_json::Number {
        serde_json::from_str(text).unwrap()
    }

    fn named(name: &str) -> Vessel {
        Vessel {
            name: Some(name.to_string()),
            ..Vessel::default()
        }
    }

    fn fleet(n: usize) -> Vec<Vessel> {
        (1..=n).map(|i| named(&format!("SHIP {}", i))).collect()
    }

    fn query(start: i64, count: i64) -> TargetQuery {
        TargetQuery::new(37.8, -122.4, 5.0, start, count)
    }

    #[test]
    fn test_format_full_vessel() {
        let vessel = Vessel {
            name: Some("NORTHERN LIGHT".to_string()),
            ship_type: Some(70),
            mmsi: Some("367000111".to_string()),
            latitude: Some(num("37.81")),
            longitude: Some(num("-122.42")),
            course_over_ground: Some(num("181.5")),
            speed_over_ground: Some(num("12.3")),
        };
        assert_eq!(
            format_vessel(&vessel),
            "\nName: NORTHERN LIGHT\nType: Cargo Ship\nMMSI: 367000111\n\
             Coordinates: 37.81, -122.42\nCourse Over Ground: 181.5\nSpeed: 12.3\n"
        );
    }

    #[test]
    fn test_format_moored_vessel_keeps_decimal() {
        let vessel: Vessel = serde_json::from_str(
            r#"{"course_over_ground": 0, "speed_over_ground": 0.0, "type": "52"}"#,
        )
        .unwrap();
        let block = format_vessel(&vessel);
        assert!(block.contains("Type: Unknown\n"));
        assert!(block.contains("Course Over Ground: 0\nSpeed: 0.0\n"));
    }

    #[test]
    fn test_format_empty_vessel_is_all_unknown() {
        assert_eq!(
            format_vessel(&Vessel::default()),
            "\nName: Unknown\nType: Unknown\nMMSI: Unknown\n\
             Coordinates: Unknown, Unknown\nCourse Over Ground: Unknown\nSpeed: Unknown\n"
        );
    }

    #[test]
    fn test_format_unrecognized_type() {
        let vessel = Vessel {
            ship_type: Some(99),
            ..Vessel::default()
        };
        assert!(format_vessel(&vessel).contains("Type: Unknown\n"));
    }

    #[test]
    fn test_query_clamps_window() {
        let q = TargetQuery::new(0.0, 0.0, 1.0, 0, 0);
        assert_eq!((q.start, q.count), (1, 1));

        let q = TargetQuery::new(0.0, 0.0, 1.0, -1, -5);
        assert_eq!((q.start, q.count), (1, 1));

        let q = TargetQuery::new(0.0, 0.0, 1.0, i64::MAX, i64::MAX);
        assert_eq!(q.next_start(), q.start.saturating_add(q.count));
    }

    #[test]
    fn test_report_header() {
        let report = render_report(&query(1, 25), &fleet(3));
        assert!(report.starts_with(
            "Found 3 vessels in the area:\n\
             Latitude: 37.8, Longitude: -122.4, Radius: 5.0 nautical miles\n\
             Vessels:\nVessel 1:\n"
        ));
    }

    #[test]
    fn test_report_small_fleet_no_hint() {
        let report = render_report(&query(1, 25), &fleet(3));
        assert!(report.contains("Vessel 1:\n\nName: SHIP 1\n"));
        assert!(report.contains("Vessel 2:\n\nName: SHIP 2\n"));
        assert!(report.contains("Vessel 3:\n\nName: SHIP 3\n"));
        assert!(!report.contains("Vessel 4:"));
        assert!(!report.contains("I will stop providing details here."));
    }

    #[test]
    fn test_report_offset_restarts_numbering() {
        let report = render_report(&query(5, 25), &fleet(10));
        assert!(report.contains("Vessel 1:\n\nName: SHIP 5\n"));
        assert!(report.contains("Vessel 6:\n\nName: SHIP 10\n"));
        assert!(!report.contains("Name: SHIP 4\n"));
        assert!(!report.contains("Vessel 7:"));
    }

    #[test]
    fn test_report_page_hint() {
        let report = render_report(&query(1, 2), &fleet(5));
        assert!(report.contains("Name: SHIP 1\n"));
        assert!(report.contains("Name: SHIP 2\n"));
        assert!(!report.contains("Name: SHIP 3\n"));
        assert!(report.ends_with(
            "\nI will stop providing details here.But you can ask for more, just start the page from 3.\n"
        ));
    }

    #[test]
    fn test_report_hint_follows_offset() {
        let report = render_report(&query(3, 2), &fleet(5));
        assert!(report.contains("Vessel 1:\n\nName: SHIP 3\n"));
        assert!(report.contains("Vessel 2:\n\nName: SHIP 4\n"));
        assert!(report.contains("start the page from 5."));
    }

    #[test]
    fn test_report_exact_page_has_no_hint() {
        let report = render_report(&query(1, 5), &fleet(5));
        assert!(report.contains("Name: SHIP 5\n"));
        assert!(!report.contains("I will stop providing details here."));
    }

    #[test]
    fn test_report_start_past_end() {
        let report = render_report(&query(20, 25), &fleet(3));
        assert!(report.starts_with("Found 3 vessels in the area:\n"));
        assert!(report.ends_with("Vessels:\n"));
        assert!(!report.contains("Vessel 1:"));
    }

    #[test]
    fn test_report_empty_area() {
        assert_eq!(render_report(&query(1, 25), &[]), NO_VESSELS);
    }
}
