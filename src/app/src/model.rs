use serde::{Deserialize, Serialize};

use crate::types::*;

/// Bootstrap progress of the dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Startup {
    #[default]
    NotStarted,
    /// Polling runs; the config load waits for the first status response
    AwaitingStatus,
    Running,
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub capabilities: Capabilities,
    pub startup: Startup,

    pub config: ConfigState,
    pub status: StatusState,
    pub measurements: MeasurementState,
    pub wifi: WifiState,

    /// Single status line shared by all components; last writer wins
    pub status_text: Option<String>,
}

impl Model {
    pub fn set_status_text(&mut self, text: impl Into<String>) {
        self.status_text = Some(text.into());
    }

    pub fn wifi_panel_visible(&self) -> bool {
        self.status.indicator.wifi_panel_visible()
    }
}
