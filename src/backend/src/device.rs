use crate::config::DeviceConfig;
use anyhow::{Result, anyhow};
use log::{debug, info};
#[cfg(feature = "mock")]
use mockall::automock;
use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use trait_variant::make;
use web_host_core::types::{
    ConfigRecord, Measurement, MeasurementValue, NetworkState, StatusSnapshot, WifiStation,
    OPEN_AUTH,
};

/// Progress of the most recent Wi-Fi scan
#[derive(Clone, Debug, PartialEq)]
pub enum ScanOutcome {
    NotStarted,
    Pending,
    Ready(Vec<WifiStation>),
}

#[make(Send)]
#[cfg_attr(feature = "mock", automock)]
pub trait DeviceService {
    async fn config(&self) -> Result<ConfigRecord>;
    async fn set_config(&self, config: ConfigRecord) -> Result<()>;
    async fn status(&self) -> Result<StatusSnapshot>;
    async fn measurements(&self) -> Result<Vec<Measurement>>;
    async fn start_scan(&self) -> Result<()>;
    async fn scan_result(&self) -> Result<ScanOutcome>;
}

#[derive(Debug)]
struct DeviceState {
    config: ConfigRecord,
    scan_started: Option<Instant>,
}

/// In-memory device answering like the firmware does
#[derive(Clone, Debug)]
pub struct SimulatedDevice {
    state: Arc<Mutex<DeviceState>>,
    stations: Arc<Vec<WifiStation>>,
    scan_duration: Duration,
    force_connected: bool,
    booted: Instant,
}

impl SimulatedDevice {
    pub fn new(config: &DeviceConfig) -> Self {
        info!(
            "simulating device '{}' (scan takes {:?})",
            config.name, config.scan_duration
        );

        Self {
            state: Arc::new(Mutex::new(DeviceState {
                config: ConfigRecord {
                    name: config.name.clone(),
                    ..Default::default()
                },
                scan_started: None,
            })),
            stations: Arc::new(nearby_stations()),
            scan_duration: config.scan_duration,
            force_connected: config.force_connected,
            booted: Instant::now(),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, DeviceState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("failed to lock device state: mutex poisoned"))
    }

    /// The device joins a network it can see and has credentials for
    fn joins_network(&self, config: &ConfigRecord) -> bool {
        if config.wifi_ssid.is_empty() {
            return false;
        }

        self.stations.iter().any(|station| {
            station.ssid == config.wifi_ssid && (station.is_open() || !config.wifi_pass.is_empty())
        })
    }
}

impl DeviceService for SimulatedDevice {
    async fn config(&self) -> Result<ConfigRecord> {
        Ok(self.state()?.config.clone())
    }

    async fn set_config(&self, config: ConfigRecord) -> Result<()> {
        debug!("storing configuration: {config:?}");
        self.state()?.config = config;
        Ok(())
    }

    async fn status(&self) -> Result<StatusSnapshot> {
        let connected = self.force_connected || self.joins_network(&self.state()?.config);

        Ok(StatusSnapshot {
            network: NetworkState { connected },
        })
    }

    async fn measurements(&self) -> Result<Vec<Measurement>> {
        Ok(readings_at(self.booted.elapsed()))
    }

    async fn start_scan(&self) -> Result<()> {
        info!("starting Wi-Fi scan");
        self.state()?.scan_started = Some(Instant::now());
        Ok(())
    }

    async fn scan_result(&self) -> Result<ScanOutcome> {
        let outcome = match self.state()?.scan_started {
            None => ScanOutcome::NotStarted,
            Some(started) if started.elapsed() < self.scan_duration => ScanOutcome::Pending,
            Some(_) => ScanOutcome::Ready(self.stations.as_ref().clone()),
        };
        Ok(outcome)
    }
}

fn nearby_stations() -> Vec<WifiStation> {
    let station = |ssid: &str, mac: &str, channel, rssi, auth: &str| WifiStation {
        ssid: ssid.to_string(),
        mac: mac.to_string(),
        channel,
        rssi,
        auth: auth.to_string(),
    };

    vec![
        station("HomeNet", "24:0a:c4:12:34:01", 6, -42, "WPA2_PSK"),
        station("Cafe-Guest", "24:0a:c4:12:34:02", 11, -67, OPEN_AUTH),
        station("", "24:0a:c4:12:34:03", 1, -81, "WPA2_PSK"),
        station("Neighbor-5G", "24:0a:c4:12:34:04", 36, -90, "WPA3_PSK"),
    ]
}

/// Sensor readings after `uptime`; values drift slowly and repeat
fn readings_at(uptime: Duration) -> Vec<Measurement> {
    let t = uptime.as_secs_f64();
    let round = |v: f64| (v * 100.0).round() / 100.0;

    let reading = |name: &str, value: Option<f64>, unit: &str| Measurement {
        name: name.to_string(),
        value: value.map(MeasurementValue::Number),
        unit: unit.to_string(),
    };

    vec![
        reading(
            "temperature",
            Some(round(21.5 + 1.5 * (t / 60.0).sin())),
            "celsius",
        ),
        reading(
            "relative_humidity",
            Some(round(45.0 + 5.0 * (t / 90.0).cos())),
            "percent",
        ),
        // no barometer fitted
        reading("pressure", None, "hpa"),
    ]
}
