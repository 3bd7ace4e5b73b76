//! Domain-based type organization
//!
//! Types are organized by component to match the structure in `update/`:
//! - config: ConfigSync record, form and default rules
//! - status: StatusMonitor snapshot and indicator
//! - measurement: MeasurementFeed decoding and rendering
//! - wifi: WifiScanner state machine and SelectionBinder inputs
//! - signal: RSSI classification
//! - common: capabilities and response plumbing shared by all components

pub mod common;
pub mod config;
pub mod measurement;
pub mod signal;
pub mod status;
pub mod wifi;

pub use common::*;
pub use config::*;
pub use measurement::*;
pub use signal::*;
pub use status::*;
pub use wifi::*;
