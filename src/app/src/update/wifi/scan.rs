use crux_core::{render::render, Command};
use std::mem;

use crate::events::{DeviceResult, Event, WifiEvent};
use crate::model::Model;
use crate::types::{
    classify_scan_result, classify_scan_start, LoaderTicket, ScanError, ScanState, WifiStation,
};
use crate::{http_get, Effect, TimerCmd, SCAN_SETTLE_MS};

pub const STARTING: &str = "Starting Wi-Fi scan...";
pub const SCANNING: &str = "Scanning... Please wait 3 seconds...";

pub fn start(model: &mut Model) -> Command<Effect, Event> {
    if !model.capabilities.wifi_scan {
        log::debug!("Wi-Fi scan not available");
        return Command::done();
    }
    if model.wifi.scan.is_running() {
        log::debug!("scan already running, ignoring trigger");
        return Command::done();
    }

    model.wifi.close_dropdown();
    let ticket = model.wifi.loader.show();
    model.wifi.scan = ScanState::Starting(ticket);
    model.set_status_text(STARTING);

    Command::all([
        render(),
        http_get!(Wifi, WifiEvent, "/api/wifi-scan-start", ScanStartResponse),
    ])
}

pub fn handle_start_response(result: DeviceResult, model: &mut Model) -> Command<Effect, Event> {
    let ticket = match mem::take(&mut model.wifi.scan) {
        ScanState::Starting(ticket) => ticket,
        other => {
            log::debug!("ignoring scan start response in state {other:?}");
            model.wifi.scan = other;
            return Command::done();
        }
    };

    let outcome = result
        .map_err(|e| {
            log::warn!("scan start request failed: {e}");
            ScanError::StartFailed
        })
        .and_then(|raw| classify_scan_start(&raw));

    match outcome {
        Ok(()) => {
            model.wifi.scan = ScanState::Scanning {
                ticket,
                fetching: false,
            };
            model.set_status_text(SCANNING);
            Command::all([
                render(),
                TimerCmd::sleep(SCAN_SETTLE_MS)
                    .build()
                    .then_send(|_| Event::Wifi(WifiEvent::ScanSettled)),
            ])
        }
        Err(e) => finish(model, ticket, Err(e)),
    }
}

/// Poll the scan result once the settling delay has elapsed
pub fn fetch_results(model: &mut Model) -> Command<Effect, Event> {
    match &mut model.wifi.scan {
        ScanState::Scanning { fetching, .. } if !*fetching => {
            *fetching = true;
            http_get!(Wifi, WifiEvent, "/api/wifi-scan-get", ScanResultResponse)
        }
        other => {
            log::debug!("ignoring scan timer in state {other:?}");
            Command::done()
        }
    }
}

pub fn handle_result_response(result: DeviceResult, model: &mut Model) -> Command<Effect, Event> {
    let ticket = match mem::take(&mut model.wifi.scan) {
        ScanState::Scanning {
            ticket,
            fetching: true,
        } => ticket,
        other => {
            log::debug!("ignoring scan result in state {other:?}");
            model.wifi.scan = other;
            return Command::done();
        }
    };

    let outcome = result
        .map_err(|e| ScanError::Failed(e.to_string()))
        .and_then(|raw| classify_scan_result(&raw));

    finish(model, ticket, outcome)
}

/// Leave the running states; the only place the loader is released
fn finish(
    model: &mut Model,
    ticket: LoaderTicket,
    outcome: Result<Vec<WifiStation>, ScanError>,
) -> Command<Effect, Event> {
    model.wifi.loader.hide(ticket);

    match outcome {
        Ok(stations) => {
            let count = stations.len();
            log::info!("Wi-Fi scan found {count} networks");
            model.wifi.last_stations = Some(stations);
            model.wifi.open_dropdown();
            model.wifi.scan = ScanState::Ready { count };
            model.set_status_text(format!("Found {count} networks."));
        }
        Err(e) => {
            log::warn!("Wi-Fi scan failed: {e:?}");
            let message = e.to_string();
            model.set_status_text(message.clone());
            model.wifi.scan = ScanState::Error { message };
        }
    }

    render()
}
