//! AIS targets tool definition.
//!
//! Lists the vessels reported by the AIS feed around a position, one page
//! at a time.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Number;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::client::VesselSource;
use super::format::{DEFAULT_COUNT, FETCH_FAILED, MAX_RADIUS_NM, TargetQuery, render_report};
use super::vessel::integral;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the AIS targets tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AisTargetsParams {
    /// Latitude of the location.
    #[schemars(description = "Latitude of the location")]
    pub latitude: f64,

    /// Longitude of the location.
    #[schemars(description = "Longitude of the location")]
    pub longitude: f64,

    /// Search radius in nautical miles.
    #[schemars(description = "Radius in nautical miles (maximum is 10)")]
    pub radius: f64,

    /// 1-based index of the first vessel to show. Values below 1 mean 1.
    #[serde(default = "default_start", deserialize_with = "whole_number")]
    #[schemars(description = "Index of the first vessel to show, starting at 1 (default: 1)")]
    pub start: i64,

    /// Maximum number of vessels to show. Values below 1 mean 1.
    #[serde(default = "default_count", deserialize_with = "whole_number")]
    #[schemars(description = "Maximum number of vessels to show (default: 25)")]
    pub count: i64,
}

fn default_start() -> i64 {
    1
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

/// An integer, also accepting `2.0`; `2.5` is rejected.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = Number::deserialize(deserializer)?;
    integral(&n).ok_or_else(|| D::Error::custom(format!("expected a whole number, got {}", n)))
}

impl AisTargetsParams {
    fn query(&self) -> TargetQuery {
        TargetQuery::new(
            self.latitude,
            self.longitude,
            self.radius,
            self.start,
            self.count,
        )
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// AIS targets tool - nearby vessels as readable text.
pub struct AisTargetsTool;

impl AisTargetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_ais_targets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get AIS targets within a radius of a location. \
         Returns name, type, MMSI, position, course and speed of each vessel. \
         Radius is in nautical miles (maximum is 10). Use start and count to page \
         through busy areas.";

    /// Look up and render one page of targets. Never fails: upstream
    /// errors are logged and reported as a fixed message.
    pub async fn report(query: &TargetQuery, source: &dyn VesselSource) -> String {
        if query.radius_nm > MAX_RADIUS_NM {
            warn!(
                "Radius {} nm exceeds the {} nm limit of the AIS API, forwarding as is",
                query.radius_nm, MAX_RADIUS_NM
            );
        }

        match source
            .fetch_vessels(query.latitude, query.longitude, query.radius_nm)
            .await
        {
            Ok(vessels) => {
                info!("Fetched {} vessels from {}", vessels.len(), source.endpoint());
                render_report(query, &vessels)
            }
            Err(e) => {
                let kind = if e.is_transient() { "transient" } else { "permanent" };
                warn!("AIS lookup failed ({}): {}", kind, e);
                FETCH_FAILED.to_string()
            }
        }
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(latitude = params.latitude, longitude = params.longitude, radius = params.radius))]
    pub async fn execute(params: &AisTargetsParams, source: &dyn VesselSource) -> CallToolResult {
        info!(
            "AIS targets tool called (start: {}, count: {})",
            params.start, params.count
        );

        let text = Self::report(&params.query(), source).await;
        CallToolResult::success(vec![Content::text(text)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        source: Arc<dyn VesselSource>,
    ) -> Result<serde_json::Value, String> {
        let params: AisTargetsParams = serde_json::from_value(arguments)
            .map_err(|e| format!("Invalid arguments for {}: {}", Self::NAME, e))?;

        let result = Self::execute(&params, source.as_ref()).await;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AisTargetsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(source: Arc<dyn VesselSource>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let source = source.clone();
            async move {
                let params: AisTargetsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, source.as_ref()).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::tools::definitions::ais::client::tests::{
        client_for, json_response, serve_once, serve_silence,
    };
    use crate::domains::tools::definitions::ais::format::NO_VESSELS;
    use crate::domains::tools::definitions::ais::{AisError, Vessel};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory vessel source recording the positions it was asked for.
    pub(crate) struct FakeSource {
        vessels: Option<Vec<Vessel>>,
        calls: Mutex<Vec<(f64, f64, f64)>>,
    }

    impl FakeSource {
        pub(crate) fn with(vessels: Vec<Vessel>) -> Self {
            Self {
                vessels: Some(vessels),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                vessels: None,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VesselSource for FakeSource {
        async fn fetch_vessels(
            &self,
            latitude: f64,
            longitude: f64,
            radius_nm: f64,
        ) -> Result<Vec<Vessel>, AisError> {
            self.calls
                .lock()
                .unwrap()
                .push((latitude, longitude, radius_nm));
            self.vessels.clone().ok_or(AisError::Status(503))
        }

        fn endpoint(&self) -> &str {
            "fake://ais"
        }
    }

    fn params(radius: f64) -> AisTargetsParams {
        AisTargetsParams {
            latitude: 50.1,
            longitude: -1.4,
            radius,
            start: 1,
            count: 25,
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn vessel(name: &str, ship_type: i64) -> Vessel {
        Vessel {
            name: Some(name.to_string()),
            ship_type: Some(ship_type),
            ..Vessel::default()
        }
    }

    #[test]
    fn test_params_defaults() {
        let json = r#"{"latitude": 50.1, "longitude": -1.4, "radius": 2}"#;
        let params: AisTargetsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.radius, 2.0);
        assert_eq!(params.start, 1);
        assert_eq!(params.count, 25);
    }

    #[test]
    fn test_params_accept_any_whole_number() {
        let params: AisTargetsParams = serde_json::from_value(serde_json::json!({
            "latitude": 50.1, "longitude": -1.4, "radius": 2, "start": -1, "count": 2.0
        }))
        .unwrap();
        assert_eq!((params.start, params.count), (-1, 2));

        let fractional = serde_json::json!({
            "latitude": 50.1, "longitude": -1.4, "radius": 2, "start": 1.5
        });
        assert!(serde_json::from_value::<AisTargetsParams>(fractional).is_err());
    }

    #[tokio::test]
    async fn test_execute_with_non_positive_window() {
        let source = FakeSource::with(vec![vessel("ALPHA", 36), vessel("BRAVO", 52)]);
        let params: AisTargetsParams = serde_json::from_value(serde_json::json!({
            "latitude": 50.1, "longitude": -1.4, "radius": 2, "start": -1, "count": 0
        }))
        .unwrap();

        let result = AisTargetsTool::execute(&params, &source).await;
        let text = text_of(&result);
        assert!(text.contains("Vessel 1:\n\nName: ALPHA\n"));
        assert!(!text.contains("Name: BRAVO"));
        assert!(text.ends_with("start the page from 2.\n"));
    }

    #[test]
    fn test_params_missing_position() {
        let json = r#"{"longitude": -1.4, "radius": 2}"#;
        assert!(serde_json::from_str::<AisTargetsParams>(json).is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AisTargetsTool::to_tool();
        assert_eq!(tool.name, "get_ais_targets");
        let schema = serde_json::Value::Object(tool.input_schema.as_ref().clone());
        let properties = schema["properties"].as_object().unwrap();
        for key in ["latitude", "longitude", "radius", "start", "count"] {
            assert!(properties.contains_key(key), "missing {}", key);
        }
    }

    #[tokio::test]
    async fn test_execute_lists_vessels() {
        let source = FakeSource::with(vec![
            vessel("ALPHA", 36),
            vessel("BRAVO", 52),
            vessel("CHARLIE", 60),
        ]);

        let result = AisTargetsTool::execute(&params(3.0), &source).await;
        assert!(!result.is_error.unwrap_or(false));

        let text = text_of(&result);
        assert!(text.starts_with("Found 3 vessels in the area:\n"));
        assert!(text.contains("Vessel 1:\n\nName: ALPHA\nType: Sailing Vessel\n"));
        assert!(text.contains("Vessel 2:\n\nName: BRAVO\nType: Tug\n"));
        assert!(text.contains("Vessel 3:\n\nName: CHARLIE\nType: Passenger Ship\n"));
        assert!(!text.contains("I will stop providing details here."));
    }

    #[tokio::test]
    async fn test_execute_upstream_failure() {
        let source = FakeSource::failing();
        let result = AisTargetsTool::execute(&params(3.0), &source).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_execute_empty_area() {
        let source = FakeSource::with(vec![]);
        let result = AisTargetsTool::execute(&params(3.0), &source).await;
        assert_eq!(text_of(&result), NO_VESSELS);
    }

    #[tokio::test]
    async fn test_oversized_radius_is_forwarded() {
        let source = FakeSource::with(vec![vessel("ALPHA", 30)]);
        AisTargetsTool::execute(&params(25.0), &source).await;
        assert_eq!(*source.calls.lock().unwrap(), vec![(50.1, -1.4, 25.0)]);
    }

    #[tokio::test]
    async fn test_report_over_http_500() {
        let (base, _request) =
            serve_once(json_response("500 Internal Server Error", "{}")).await;
        let client = client_for(&base, 30);

        let query = TargetQuery::new(50.1, -1.4, 3.0, 1, 25);
        assert_eq!(AisTargetsTool::report(&query, &client).await, FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_report_over_http_timeout() {
        let base = serve_silence().await;
        let client = client_for(&base, 1);

        let query = TargetQuery::new(50.1, -1.4, 3.0, 1, 25);
        assert_eq!(AisTargetsTool::report(&query, &client).await, FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_report_over_http_success() {
        let body = r#"[
            {"name": "ALPHA", "type": 71, "mmsi": 235000001, "latitude": 50.11, "longitude": -1.41},
            {"name": null, "type": "52"}
        ]"#;
        let (base, _request) = serve_once(json_response("200 OK", body)).await;
        let client = client_for(&base, 30);

        let query = TargetQuery::new(50.1, -1.4, 3.0, 1, 25);
        let text = AisTargetsTool::report(&query, &client).await;
        assert!(text.contains(
            "Vessel 1:\n\nName: ALPHA\nType: Tanker\nMMSI: 235000001\nCoordinates: 50.11, -1.41\n"
        ));
        assert!(text.contains("Vessel 2:\n\nName: Unknown\nType: Unknown\n"));
    }
}
