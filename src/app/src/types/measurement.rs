use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const MEASUREMENT_NAMES: &[(&str, &str)] = &[
    ("relative_humidity", "Relative Humidity"),
    ("temperature", "Temperature"),
    ("pressure", "Pressure"),
];

const UNIT_NAMES: &[(&str, &str)] = &[("celsius", "ºC"), ("percent", "%"), ("hpa", "hPa")];

pub const NO_MEASUREMENTS: &str = "No measurements available.";
pub const MEASUREMENTS_FAILED: &str = "Failed to load measurements.";
pub const MISSING_VALUE: &str = "N/A";

/// A sensor reading value; older firmware reports numbers as strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MeasurementValue {
    Number(f64),
    Text(String),
}

/// One entry of `/api/meas`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    #[serde(default = "unknown_name", deserialize_with = "name_or_unknown")]
    pub name: String,
    #[serde(default)]
    pub value: Option<MeasurementValue>,
    #[serde(default, deserialize_with = "unit_or_empty")]
    pub unit: String,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

// `null` is treated like a missing field
fn name_or_unknown<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown_name))
}

fn unit_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Measurement {
    /// Render the value, keeping `0` distinct from a missing value
    pub fn value_text(&self) -> String {
        match &self.value {
            Some(MeasurementValue::Number(n)) if *n == 0.0 => "0".to_string(),
            Some(MeasurementValue::Number(n)) => n.to_string(),
            Some(MeasurementValue::Text(t)) if !t.is_empty() => t.clone(),
            _ => MISSING_VALUE.to_string(),
        }
    }
}

/// Look up a display name, passing unknown keys through
pub fn display_name(name: &str) -> &str {
    lookup(MEASUREMENT_NAMES, name)
}

/// Look up a display unit, passing unknown keys through
pub fn display_unit(unit: &str) -> &str {
    lookup(UNIT_NAMES, unit)
}

fn lookup<'a>(table: &'static [(&'static str, &'static str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, display)| *display)
        .unwrap_or(key)
}

/// One rendered row of the measurement panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeasurementRow {
    pub name: String,
    pub value: String,
}

impl MeasurementRow {
    pub fn render(measurement: &Measurement, translate: bool) -> Self {
        let (name, unit) = if translate {
            (
                display_name(&measurement.name),
                display_unit(&measurement.unit),
            )
        } else {
            (measurement.name.as_str(), measurement.unit.as_str())
        };

        let value = measurement.value_text();
        let value = if unit.is_empty() {
            value
        } else {
            format!("{value} {unit}")
        };

        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// Decoded body of `/api/meas`
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementList {
    Readings(Vec<Measurement>),
    /// Valid JSON that is not a usable list
    Empty,
}

impl MeasurementList {
    pub fn from_json(value: Value) -> Self {
        let Value::Array(items) = value else {
            return Self::Empty;
        };

        let readings: Vec<Measurement> = items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).unwrap_or_else(|_| Measurement {
                    name: unknown_name(),
                    value: None,
                    unit: String::new(),
                })
            })
            .collect();

        if readings.is_empty() {
            Self::Empty
        } else {
            Self::Readings(readings)
        }
    }
}

/// What the measurement panel shows
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MeasurementView {
    #[default]
    Loading,
    NoData,
    Failed,
    Rows(Vec<MeasurementRow>),
}

impl MeasurementView {
    /// Placeholder text for the non-row states
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading measurements..."),
            Self::NoData => Some(NO_MEASUREMENTS),
            Self::Failed => Some(MEASUREMENTS_FAILED),
            Self::Rows(_) => None,
        }
    }
}

/// MeasurementFeed slice of the model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeasurementState {
    pub view: MeasurementView,
    pub in_flight: bool,
}
