use serde::{Deserialize, Serialize};
use std::fmt;

/// Feature set of the dashboard, chosen once at startup
///
/// Older firmware images ship a reduced dashboard; the shell passes the set that
/// matches the device it talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capabilities {
    pub wifi_scan: bool,
    pub password_toggle: bool,
    pub rich_measurements: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            wifi_scan: true,
            password_toggle: true,
            rich_measurements: true,
        }
    }
}

/// Why a request to the device did not produce a usable answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestError {
    /// Network unreachable, timeout, or any failure before a response arrived
    Transport(String),
    /// The device answered with a non-2xx status
    Protocol { status: u16 },
    /// The body is not valid JSON or misses required fields
    Decode(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport failure: {e}"),
            Self::Protocol { status } => write!(f, "HTTP error: {status}"),
            Self::Decode(e) => write!(f, "decode failure: {e}"),
        }
    }
}

/// Status code and body of a device response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`RequestError::Protocol`] unless the status is 2xx
    pub fn ensure_success(&self) -> Result<&Self, RequestError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RequestError::Protocol {
                status: self.status,
            })
        }
    }

    /// Decode a 2xx JSON body
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, RequestError> {
        let response = self.ensure_success()?;
        serde_json::from_slice(&response.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}
