use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub const NO_PREVIOUS_RESULTS: &str = "No previous scan results. Please scan first.";

/// Re-render the cached scan results without scanning again
pub fn open_dropdown(model: &mut Model) -> Command<Effect, Event> {
    if !model.wifi.open_dropdown() {
        model.set_status_text(NO_PREVIOUS_RESULTS);
    }
    render()
}

pub fn dismiss_dropdown(model: &mut Model) -> Command<Effect, Event> {
    if !model.wifi.dropdown_open() {
        return Command::done();
    }
    model.wifi.close_dropdown();
    render()
}

/// Copy the chosen station into the form and constrain the password input
pub fn select_station(index: usize, model: &mut Model) -> Command<Effect, Event> {
    if !model.wifi.dropdown_open() {
        log::debug!("dropdown closed, ignoring station selection");
        return Command::done();
    }

    let Some(station) = model
        .wifi
        .last_stations
        .as_ref()
        .and_then(|stations| stations.get(index))
        .cloned()
    else {
        log::warn!("no cached station at index {index}");
        return Command::done();
    };

    model.config.form.wifi_ssid = station.ssid.clone();
    model.wifi.close_dropdown();

    if station.is_open() {
        model.config.form.wifi_pass.clear();
        model.wifi.password.disable_for_open_network();
    } else {
        model.wifi.password.enable();
    }

    render()
}

/// Manual SSID entry lifts any open-network restriction
pub fn edit_ssid(ssid: String, model: &mut Model) -> Command<Effect, Event> {
    model.config.form.wifi_ssid = ssid;
    model.wifi.password.enable();
    render()
}
