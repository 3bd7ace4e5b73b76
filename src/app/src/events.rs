use serde::{Deserialize, Serialize};

use crate::types::{Capabilities, RawResponse, RequestError};

/// Result of a device request as seen by the update handlers
pub type DeviceResult = Result<RawResponse, RequestError>;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Sent once by the shell when the dashboard starts
    Initialize(Capabilities),
    Config(ConfigEvent),
    Status(StatusEvent),
    Measurement(MeasurementEvent),
    Wifi(WifiEvent),
}

/// Configuration form and device config synchronization
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    Load,
    Save,
    EditName(String),
    /// Raw text of the slider or the number input
    EditBlinking(String),
    EditPassword(String),
    TogglePasswordVisibility,

    #[serde(skip)]
    LoadResponse(DeviceResult),
    #[serde(skip)]
    SaveResponse(DeviceResult),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    Tick,

    #[serde(skip)]
    Response(DeviceResult),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum MeasurementEvent {
    Tick,

    #[serde(skip)]
    Response(DeviceResult),
}

/// Wi-Fi scan workflow and station selection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WifiEvent {
    StartScan,
    OpenDropdown,
    /// Click outside the dropdown
    DismissDropdown,
    SelectStation {
        index: usize,
    },
    SsidEdited(String),

    #[serde(skip)]
    ScanStartResponse(DeviceResult),
    #[serde(skip)]
    ScanSettled,
    #[serde(skip)]
    ScanResultResponse(DeviceResult),
}
