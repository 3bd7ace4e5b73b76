use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::RawResponse;
use super::signal::{classify_rssi, SignalQuality};

/// Auth value the device reports for unsecured networks
pub const OPEN_AUTH: &str = "OPEN";

pub const OPEN_NETWORK_PLACEHOLDER: &str = "Open network (no password)";
pub const PASSWORD_PLACEHOLDER: &str = "Enter Wi-Fi password";

/// Access point found by a device scan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiStation {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub channel: u32,
    /// Signal strength in dBm
    pub rssi: i32,
    #[serde(default)]
    pub auth: String,
}

impl WifiStation {
    pub fn is_open(&self) -> bool {
        self.auth == OPEN_AUTH
    }
}

/// Acknowledgment body of `/api/wifi-scan-start`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanAck {
    #[serde(default)]
    pub status: String,
}

impl ScanAck {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `/api/wifi-scan-get`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResults {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub stations: Option<Vec<WifiStation>>,
}

/// Terminal failures of a scan attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanError {
    StartFailed,
    NotStarted,
    NotReady,
    Failed(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartFailed => write!(f, "Wi-Fi scan start failed."),
            Self::NotStarted => write!(f, "Scan not started."),
            Self::NotReady => write!(f, "Scan not ready yet."),
            Self::Failed(_) => write!(f, "Failed to scan Wi-Fi."),
        }
    }
}

/// A start is acknowledged only by a 2xx `{"status":"ok"}`
pub fn classify_scan_start(raw: &RawResponse) -> Result<(), ScanError> {
    match raw.json::<ScanAck>() {
        Ok(ack) if ack.status == "ok" => Ok(()),
        _ => Err(ScanError::StartFailed),
    }
}

/// Classify the answer of the result poll
pub fn classify_scan_result(raw: &RawResponse) -> Result<Vec<WifiStation>, ScanError> {
    match raw.status {
        409 => return Err(ScanError::NotStarted),
        425 => return Err(ScanError::NotReady),
        _ => {}
    }

    let results: ScanResults = raw
        .json()
        .map_err(|e| ScanError::Failed(e.to_string()))?;

    if results.status != "ok" {
        return Err(ScanError::Failed(format!(
            "unexpected scan status '{}'",
            results.status
        )));
    }

    results
        .stations
        .ok_or_else(|| ScanError::Failed("missing station list".to_string()))
}

/// Proof that the loading indicator is shown for the current scan attempt
///
/// Only [`LoadingIndicator::show`] creates one and [`LoadingIndicator::hide`]
/// consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoaderTicket {
    attempt: u32,
}

/// Spinner next to the scan button
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadingIndicator {
    visible: bool,
    shown: u32,
    hidden: u32,
}

impl LoadingIndicator {
    pub fn show(&mut self) -> LoaderTicket {
        self.visible = true;
        self.shown += 1;
        LoaderTicket {
            attempt: self.shown,
        }
    }

    pub fn hide(&mut self, ticket: LoaderTicket) {
        if ticket.attempt != self.shown {
            log::warn!(
                "hiding loader for stale scan attempt {} (current {})",
                ticket.attempt,
                self.shown
            );
        }
        self.visible = false;
        self.hidden += 1;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of times the indicator was shown
    pub fn shown(&self) -> u32 {
        self.shown
    }

    /// Number of times the indicator was hidden
    pub fn hidden(&self) -> u32 {
        self.hidden
    }
}

/// WifiScanner state machine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Starting(LoaderTicket),
    /// Start acknowledged; `fetching` is set once the result poll is issued
    Scanning {
        ticket: LoaderTicket,
        fetching: bool,
    },
    Ready {
        count: usize,
    },
    Error {
        message: String,
    },
}

impl ScanState {
    /// A scan attempt is in progress; the scan button is disabled
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Starting(_) | Self::Scanning { .. })
    }
}

/// One row of the SSID dropdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationEntry {
    pub label: String,
    pub tooltip: String,
    pub locked: bool,
    pub auth: String,
    pub rssi: i32,
    pub signal: SignalQuality,
    pub signal_level: u8,
}

impl From<&WifiStation> for StationEntry {
    fn from(station: &WifiStation) -> Self {
        let label = if station.ssid.is_empty() {
            "(Unnamed)".to_string()
        } else {
            station.ssid.clone()
        };
        let mac = if station.mac.is_empty() {
            "Unknown"
        } else {
            station.mac.as_str()
        };
        let channel = if station.channel == 0 {
            "N/A".to_string()
        } else {
            station.channel.to_string()
        };
        let signal = classify_rssi(station.rssi);

        Self {
            label,
            tooltip: format!("MAC: {mac}\nChannel: {channel}"),
            locked: !station.auth.is_empty() && !station.is_open(),
            auth: station.auth.clone(),
            rssi: station.rssi,
            signal,
            signal_level: signal.level(),
        }
    }
}

/// Password input constraints derived from the last station selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordInput {
    pub disabled: bool,
    pub placeholder: String,
    pub revealed: bool,
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self {
            disabled: false,
            placeholder: PASSWORD_PLACEHOLDER.to_string(),
            revealed: false,
        }
    }
}

impl PasswordInput {
    pub fn enable(&mut self) {
        self.disabled = false;
        self.placeholder = PASSWORD_PLACEHOLDER.to_string();
    }

    pub fn disable_for_open_network(&mut self) {
        self.disabled = true;
        self.placeholder = OPEN_NETWORK_PLACEHOLDER.to_string();
    }

    /// Label of the show/hide button
    pub fn toggle_label(&self) -> &'static str {
        if self.revealed {
            "Hide"
        } else {
            "Show"
        }
    }
}

/// WifiScanner and SelectionBinder slice of the model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WifiState {
    pub scan: ScanState,
    pub loader: LoadingIndicator,
    /// Stations of the last successful scan
    pub last_stations: Option<Vec<WifiStation>>,
    /// Rendered dropdown rows; empty while the dropdown is closed
    pub dropdown: Vec<StationEntry>,
    pub password: PasswordInput,
}

impl WifiState {
    pub fn dropdown_open(&self) -> bool {
        !self.dropdown.is_empty()
    }

    pub fn scan_enabled(&self) -> bool {
        !self.scan.is_running()
    }

    /// Render the cached stations into the dropdown; returns false without stations
    pub fn open_dropdown(&mut self) -> bool {
        match &self.last_stations {
            Some(stations) if !stations.is_empty() => {
                self.dropdown = stations.iter().map(StationEntry::from).collect();
                true
            }
            _ => {
                self.dropdown.clear();
                false
            }
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown.clear();
    }
}
