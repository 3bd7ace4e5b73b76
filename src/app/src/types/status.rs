use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Connectivity report from `/api/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub network: NetworkState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkState {
    /// Only a literal JSON `true` counts as connected
    #[serde(default, deserialize_with = "literal_true")]
    pub connected: bool,
}

fn literal_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(
        Option::<Value>::deserialize(deserializer)?,
        Some(Value::Bool(true))
    ))
}

/// Tri-state connectivity indicator (plus the state before the first poll)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConnectionIndicator {
    #[default]
    Unknown,
    Connected,
    Disconnected,
    Unreachable,
}

impl ConnectionIndicator {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Unknown => "gray",
            Self::Connected => "green",
            Self::Disconnected => "orange",
            Self::Unreachable => "red",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Unknown => "Checking connection...",
            Self::Connected => "Wi-Fi connected",
            Self::Disconnected => "Wi-Fi disconnected",
            Self::Unreachable => "Device disconnected",
        }
    }

    /// The Wi-Fi configuration panel is only hidden while the device is online
    pub fn wifi_panel_visible(&self) -> bool {
        !matches!(self, Self::Connected)
    }
}

/// StatusMonitor slice of the model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusState {
    pub indicator: ConnectionIndicator,
    pub in_flight: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_is_connected() {
        let connected: StatusSnapshot =
            serde_json::from_str(r#"{"network":{"connected":true}}"#).unwrap();
        let stringly: StatusSnapshot =
            serde_json::from_str(r#"{"network":{"connected":"true"}}"#).unwrap();
        let missing: StatusSnapshot = serde_json::from_str(r#"{}"#).unwrap();

        assert!(connected.network.connected);
        assert!(!stringly.network.connected);
        assert!(!missing.network.connected);
    }

    #[test]
    fn panel_visibility_follows_indicator() {
        assert!(!ConnectionIndicator::Connected.wifi_panel_visible());
        assert!(ConnectionIndicator::Disconnected.wifi_panel_visible());
        assert!(ConnectionIndicator::Unreachable.wifi_panel_visible());
        assert_ne!(
            ConnectionIndicator::Disconnected.color(),
            ConnectionIndicator::Unreachable.color()
        );
    }
}
