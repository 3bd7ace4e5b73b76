mod scan;
mod selection;

use crux_core::Command;

use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::Effect;

/// Handle Wi-Fi scan and station selection events
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::StartScan => scan::start(model),
        WifiEvent::ScanStartResponse(result) => scan::handle_start_response(result, model),
        WifiEvent::ScanSettled => scan::fetch_results(model),
        WifiEvent::ScanResultResponse(result) => scan::handle_result_response(result, model),

        WifiEvent::OpenDropdown => selection::open_dropdown(model),
        WifiEvent::DismissDropdown => selection::dismiss_dropdown(model),
        WifiEvent::SelectStation { index } => selection::select_station(index, model),
        WifiEvent::SsidEdited(ssid) => selection::edit_ssid(ssid, model),
    }
}
