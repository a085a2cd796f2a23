//! Service DTOs
//!
//! Wire types for the telemetry and chat services.

use serde::{Deserialize, Serialize};

/// Device types offered by the add-device form.
pub const DEVICE_TYPES: [&str; 9] = [
    "Refrigerator",
    "Air Conditioner",
    "Washing Machine",
    "Dishwasher",
    "Water Heater",
    "Light",
    "TV",
    "Computer",
    "Other",
];

/// A registered household device. The service returns more fields
/// (`user_id`, timestamps); only these are rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub device_type: String,
}

/// One power sample of a device's telemetry series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryPoint {
    /// ISO-ish timestamp as emitted by the service; charted in server order
    pub timestamp: String,
    pub energy_watts: f64,
}

/// Aggregate figures for one device over a trailing period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceStats {
    pub avg_energy_watts: f64,
    pub max_energy_watts: f64,
    pub min_energy_watts: f64,
    pub total_energy_watt_hours: f64,
}

/// Answer to a natural-language query.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub data: ChatData,
    #[serde(default)]
    pub device_id: Option<i64>,
    #[serde(default)]
    pub time_period: Option<String>,
}

/// Optional structured payload riding along with a chat answer.
///
/// A missing `telemetry` key deserializes to `None` and suppresses the chart;
/// a present-but-empty array is `Some(vec![])` and renders an empty chart.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatData {
    #[serde(default)]
    pub stats: Option<DeviceStats>,
    #[serde(default)]
    pub telemetry: Option<Vec<TelemetryPoint>>,
}

/// Error shape of both services.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_ignores_extra_fields() {
        let device: Device = serde_json::from_str(
            r#"{"id":3,"name":"Freezer","device_type":"Refrigerator","user_id":1,"created_at":"2024-06-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(device.id, 3);
        assert_eq!(device.name, "Freezer");
        assert_eq!(device.device_type, "Refrigerator");
    }

    #[test]
    fn missing_telemetry_key_is_none() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"answer":"Your fridge used 2.4 kWh yesterday.","data":{"stats":{"avg_energy_watts":100.0,"max_energy_watts":150.0,"min_energy_watts":80.0,"total_energy_watt_hours":2400.0}},"device_id":3,"time_period":"yesterday"}"#,
        )
        .unwrap();
        assert!(response.data.telemetry.is_none());
        assert!(response.data.stats.is_some());
        assert_eq!(response.device_id, Some(3));
    }

    #[test]
    fn empty_telemetry_array_stays_present() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"answer":"No samples in that window.","data":{"telemetry":[]}}"#,
        )
        .unwrap();
        assert_eq!(response.data.telemetry, Some(vec![]));
        assert!(response.data.stats.is_none());
    }

    #[test]
    fn empty_data_object_defaults() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"answer":"I could not match a device.","data":{}}"#).unwrap();
        assert_eq!(response.data, ChatData::default());
        assert!(response.time_period.is_none());
    }
}
