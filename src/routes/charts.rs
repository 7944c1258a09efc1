//! Chart payload DTOs shared by every chart endpoint.
//!
//! The wire shape is fixed across chart kinds: metadata plus one dataset
//! per station, where a dataset's points are either activity windows (bar)
//! or labelled buckets (line).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::TIMESTAMP_FORMAT;

/// Chart rendering family understood by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Static metadata describing one chart endpoint.
///
/// Axis bounds are presentation hints for the dashboard; values outside
/// them are passed through untouched.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Contiguous broadcast windows, rendered as horizontal bars.
pub const BROADCAST_TIMES: ChartSpec = ChartSpec {
    kind: ChartKind::Bar,
    title: "Broadcast times",
    description: None,
    min: None,
    max: None,
};

/// Average temperature per 15-minute bucket.
pub const TEMPERATURE_COURSE: ChartSpec = ChartSpec {
    kind: ChartKind::Line,
    title: "Temperature Course",
    description: Some("C°"),
    min: Some(-20.0),
    max: Some(50.0),
};

/// Average image brightness per 15-minute bucket.
pub const BRIGHTNESS_COURSE: ChartSpec = ChartSpec {
    kind: ChartKind::Line,
    title: "Brightness Course",
    description: Some("Brightness"),
    min: Some(0.0),
    max: Some(5_000_000.0),
};

/// Uploaded images per hour.
pub const UPLOAD_ACTIVITY: ChartSpec = ChartSpec {
    kind: ChartKind::Line,
    title: "Upload Activity",
    description: Some("Images per hour"),
    min: Some(0.0),
    max: Some(100.0),
};

/// One point of a chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    /// Bar chart value: a contiguous activity window.
    Range { start: String, end: String },
    /// Line chart value: one fixed-width bucket.
    Value { timestamp: String, value: f64 },
}

impl DataPoint {
    pub fn range(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DataPoint::Range {
            start: start.format(TIMESTAMP_FORMAT).to_string(),
            end: end.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn value(timestamp: NaiveDateTime, value: f64) -> Self {
        DataPoint::Value {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            value,
        }
    }
}

/// One station's series within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub station_name: String,
    pub values: Vec<DataPoint>,
}

/// Complete chart payload returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub chart_type: ChartKind,
    pub chart_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Empty chart carrying the spec's metadata.
    pub fn new(spec: &ChartSpec) -> Self {
        Self {
            chart_type: spec.kind,
            chart_title: spec.title.to_string(),
            description: spec.description.map(str::to_string),
            min: spec.min,
            max: spec.max,
            datasets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_omits_axis_metadata() {
        let chart = ChartData::new(&BROADCAST_TIMES);
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["chartType"], "bar");
        assert_eq!(json["chartTitle"], "Broadcast times");
        assert!(json.get("min").is_none());
        assert!(json.get("max").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_line_chart_carries_axis_metadata() {
        let chart = ChartData::new(&TEMPERATURE_COURSE);
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["chartType"], "line");
        assert_eq!(json["description"], "C°");
        assert_eq!(json["min"], -20.0);
        assert_eq!(json["max"], 50.0);
    }

    #[test]
    fn test_datapoint_wire_format() {
        let range = DataPoint::Range {
            start: "2024-06-01 08:00:00".to_string(),
            end: "2024-06-01 08:09:00".to_string(),
        };
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(json["start"], "2024-06-01 08:00:00");

        let value = DataPoint::Value {
            timestamp: "2024-06-01 08:00:00".to_string(),
            value: 11.0,
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["value"], 11.0);
    }
}
