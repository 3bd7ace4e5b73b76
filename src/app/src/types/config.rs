use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;

/// Name used when the device reports a blank or missing name
pub const DEFAULT_NAME: &str = "Web-Host-MCU";

/// LED blinking period used when the device reports no usable value
pub const DEFAULT_BLINKING_MS: u32 = 250;

/// Device configuration record as exchanged with `/api/config`
///
/// The validation attributes describe what the device firmware accepts; the core
/// itself never rejects a record, it normalizes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ConfigRecord {
    #[validate(min_length = 1)]
    #[validate(max_length = 63)]
    pub name: String,
    #[validate(maximum = 65535)]
    pub blinking_ms: u32,
    #[serde(default)]
    pub wifi_ssid: String,
    #[serde(default)]
    pub wifi_pass: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            blinking_ms: DEFAULT_BLINKING_MS,
            wifi_ssid: String::new(),
            wifi_pass: String::new(),
        }
    }
}

impl ConfigRecord {
    /// Build a record from an arbitrary JSON document, field by field
    ///
    /// Returns `None` when the document is not a JSON object. Inside an object every
    /// field falls back to its default independently of the others.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        Some(Self {
            name: normalize_name(object.get("name").and_then(Value::as_str)),
            blinking_ms: object
                .get("blinking_ms")
                .and_then(Value::as_f64)
                .map(blinking_ms_from_f64)
                .unwrap_or(DEFAULT_BLINKING_MS),
            wifi_ssid: normalize_text(object.get("wifi_ssid").and_then(Value::as_str)),
            wifi_pass: normalize_text(object.get("wifi_pass").and_then(Value::as_str)),
        })
    }
}

/// Working copy of the configuration as edited in the form
///
/// `blinking_ms` keeps the raw text of the slider/number input so that partially
/// typed values survive until the next save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigForm {
    pub name: String,
    pub blinking_ms: String,
    pub wifi_ssid: String,
    pub wifi_pass: String,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self::from(&ConfigRecord::default())
    }
}

impl From<&ConfigRecord> for ConfigForm {
    fn from(record: &ConfigRecord) -> Self {
        Self {
            name: record.name.clone(),
            blinking_ms: record.blinking_ms.to_string(),
            wifi_ssid: record.wifi_ssid.clone(),
            wifi_pass: record.wifi_pass.clone(),
        }
    }
}

impl ConfigForm {
    /// Apply the per-field default rules to the working copy
    pub fn normalize(&self) -> ConfigRecord {
        ConfigRecord {
            name: normalize_name(Some(&self.name)),
            blinking_ms: parse_blinking_ms(&self.blinking_ms),
            wifi_ssid: normalize_text(Some(&self.wifi_ssid)),
            wifi_pass: normalize_text(Some(&self.wifi_pass)),
        }
    }
}

/// ConfigSync slice of the model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigState {
    pub form: ConfigForm,
    /// A load or save is outstanding; the save action is disabled
    pub busy: bool,
}

impl ConfigState {
    pub fn save_enabled(&self) -> bool {
        !self.busy
    }
}

fn normalize_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_NAME.to_string(),
    }
}

fn normalize_text(text: Option<&str>) -> String {
    text.map(str::trim).unwrap_or_default().to_string()
}

fn blinking_ms_from_f64(value: f64) -> u32 {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        value.trunc() as u32
    } else {
        DEFAULT_BLINKING_MS
    }
}

/// Parse the raw blinking input, falling back to the default when unusable
pub fn parse_blinking_ms(raw: &str) -> u32 {
    raw.trim()
        .parse::<f64>()
        .map(blinking_ms_from_f64)
        .unwrap_or(DEFAULT_BLINKING_MS)
}
