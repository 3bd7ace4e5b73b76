use anyhow::{Context, Result};
use std::{env, net::IpAddr, path::PathBuf, sync::OnceLock, time::Duration};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Simulator configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listener configuration
    pub server: ServerConfig,

    /// Behaviour of the simulated device
    pub device: DeviceConfig,

    /// Directory with the built dashboard, served at `/` when set
    pub webroot: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct DeviceConfig {
    pub name: String,
    pub scan_duration: Duration,
    /// Report a connected network regardless of the Wi-Fi settings
    pub force_connected: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: "Web-Host MCU".to_string(),
            scan_duration: Duration::from_millis(2500),
            force_connected: false,
        }
    }
}

impl AppConfig {
    /// Load the configuration from the environment on first call
    ///
    /// Later calls return the cached instance.
    pub fn init() -> Result<&'static Self> {
        if let Some(config) = APP_CONFIG.get() {
            return Ok(config);
        }

        let config = Self::load_from(|key| env::var(key).ok())?;
        Ok(APP_CONFIG.get_or_init(|| config))
    }

    /// Load and validate the configuration from an arbitrary variable source
    pub fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server = ServerConfig::load(&var)?;
        let device = DeviceConfig::load(&var)?;
        let webroot = var("WEBROOT_DIR").map(PathBuf::from);

        if let Some(webroot) = &webroot {
            anyhow::ensure!(
                webroot.is_dir(),
                "failed to find WEBROOT_DIR: {} is not a directory",
                webroot.display()
            );
        }

        Ok(Self {
            server,
            device,
            webroot,
        })
    }
}

impl ServerConfig {
    fn load(var: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = var("DEVICE_BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("failed to parse DEVICE_BIND_ADDR: invalid format")?;

        let port = var("DEVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("failed to parse DEVICE_PORT: invalid format")?;

        Ok(Self { bind_addr, port })
    }
}

impl DeviceConfig {
    fn load(var: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let name = var("DEVICE_NAME").unwrap_or(defaults.name);

        let scan_duration = match var("SCAN_DURATION_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse::<u64>()
                    .context("failed to parse SCAN_DURATION_MS: invalid format")?,
            ),
            None => defaults.scan_duration,
        };

        let force_connected = match var("DEVICE_CONNECTED") {
            Some(flag) => flag
                .parse::<bool>()
                .context("failed to parse DEVICE_CONNECTED: expected true or false")?,
            None => defaults.force_connected,
        };

        Ok(Self {
            name,
            scan_duration,
            force_connected,
        })
    }
}
