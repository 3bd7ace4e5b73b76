use serde::{Deserialize, Serialize};

/// Discrete Wi-Fi signal quality, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignalQuality {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl SignalQuality {
    /// Number of lit bars in the signal icon (0..=4)
    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// Map an RSSI reading in dBm to a signal quality
pub fn classify_rssi(rssi: i32) -> SignalQuality {
    match rssi {
        r if r >= -40 => SignalQuality::Excellent,
        r if r >= -55 => SignalQuality::Good,
        r if r >= -70 => SignalQuality::Fair,
        r if r >= -85 => SignalQuality::Weak,
        _ => SignalQuality::VeryWeak,
    }
}
