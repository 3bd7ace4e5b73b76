//! StatusMonitor: polls `/api/status` and drives the connection indicator
//!
//! Status text is written only when the indicator changes, not on every poll,
//! so a steady connection does not keep overwriting messages from config saves
//! or Wi-Fi scans.

use crux_core::{render::render, Command};

use crate::events::{DeviceResult, Event, StatusEvent};
use crate::model::{Model, Startup};
use crate::types::{ConnectionIndicator, StatusSnapshot};
use crate::{decode_json, http_get, schedule_tick, Effect, STATUS_POLL_MS};

pub const CONNECTED_TEXT: &str = "Network connected. Wi-Fi config hidden.";
pub const UNREACHABLE_TEXT: &str = "Failed to fetch network status. Wi-Fi config visible.";

/// Handle StatusMonitor events
pub fn handle(event: StatusEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        StatusEvent::Tick => Command::all([
            schedule_tick!(Status, StatusEvent, STATUS_POLL_MS),
            poll(model),
        ]),
        StatusEvent::Response(result) => handle_response(result, model),
    }
}

/// Issue a status request unless the previous one is still outstanding
pub fn poll(model: &mut Model) -> Command<Effect, Event> {
    if model.status.in_flight {
        log::debug!("status request outstanding, skipping poll");
        return Command::done();
    }

    model.status.in_flight = true;
    http_get!(Status, StatusEvent, "/api/status", Response)
}

pub fn classify(result: DeviceResult) -> ConnectionIndicator {
    match decode_json::<StatusSnapshot>(result) {
        Ok(snapshot) if snapshot.network.connected => ConnectionIndicator::Connected,
        Ok(_) => ConnectionIndicator::Disconnected,
        Err(e) => {
            log::warn!("status poll failed: {e}");
            ConnectionIndicator::Unreachable
        }
    }
}

fn handle_response(result: DeviceResult, model: &mut Model) -> Command<Effect, Event> {
    model.status.in_flight = false;

    let indicator = classify(result);
    let changed = model.status.indicator != indicator;
    if changed {
        log::info!(
            "connection indicator {:?} -> {indicator:?}",
            model.status.indicator
        );
        model.status.indicator = indicator;
        match indicator {
            ConnectionIndicator::Connected => model.set_status_text(CONNECTED_TEXT),
            ConnectionIndicator::Unreachable => model.set_status_text(UNREACHABLE_TEXT),
            ConnectionIndicator::Disconnected | ConnectionIndicator::Unknown => {}
        }
    }

    let bootstrap = if model.startup == Startup::AwaitingStatus {
        model.startup = Startup::Running;
        super::config::load(model)
    } else {
        Command::done()
    };

    if changed {
        Command::all([render(), bootstrap])
    } else {
        bootstrap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawResponse, RequestError};

    fn respond(model: &mut Model, result: DeviceResult) {
        let _ = handle(StatusEvent::Response(result), model);
    }

    fn connected(value: bool) -> DeviceResult {
        Ok(RawResponse::new(
            200,
            format!(r#"{{"network":{{"connected":{value}}}}}"#),
        ))
    }

    #[test]
    fn connected_hides_wifi_panel() {
        let mut model = Model::default();
        assert!(model.wifi_panel_visible());

        respond(&mut model, connected(true));

        assert_eq!(model.status.indicator, ConnectionIndicator::Connected);
        assert_eq!(model.status.indicator.color(), "green");
        assert!(!model.wifi_panel_visible());
        assert_eq!(model.status_text.as_deref(), Some(CONNECTED_TEXT));
    }

    #[test]
    fn disconnected_shows_wifi_panel() {
        let mut model = Model::default();
        respond(&mut model, connected(false));

        assert_eq!(model.status.indicator, ConnectionIndicator::Disconnected);
        assert_eq!(model.status.indicator.title(), "Wi-Fi disconnected");
        assert!(model.wifi_panel_visible());
    }

    #[test]
    fn failures_mark_device_unreachable() {
        for result in [
            Err(RequestError::Transport("timeout".to_string())),
            Ok(RawResponse::new(500, "")),
            Ok(RawResponse::new(200, "garbage")),
        ] {
            let mut model = Model::default();
            respond(&mut model, result);

            assert_eq!(model.status.indicator, ConnectionIndicator::Unreachable);
            assert!(model.wifi_panel_visible());
            assert_eq!(model.status_text.as_deref(), Some(UNREACHABLE_TEXT));
        }
    }

    #[test]
    fn status_text_is_written_only_on_change() {
        let mut model = Model::default();
        respond(&mut model, connected(true));

        model.set_status_text("Configuration saved successfully.");
        respond(&mut model, connected(true));

        assert_eq!(
            model.status_text.as_deref(),
            Some("Configuration saved successfully.")
        );
    }

    #[test]
    fn tick_skips_while_request_outstanding() {
        let mut model = Model::default();

        let _ = handle(StatusEvent::Tick, &mut model);
        assert!(model.status.in_flight);

        let _ = handle(StatusEvent::Tick, &mut model);
        assert!(model.status.in_flight);

        respond(&mut model, connected(false));
        assert!(!model.status.in_flight);
    }

    #[test]
    fn first_response_starts_config_load_whatever_the_outcome() {
        let mut model = Model {
            startup: Startup::AwaitingStatus,
            ..Default::default()
        };

        respond(&mut model, Err(RequestError::Transport("offline".to_string())));

        assert_eq!(model.startup, Startup::Running);
        assert!(model.config.busy);
        assert_eq!(
            model.status_text.as_deref(),
            Some(super::super::config::LOADING)
        );

        model.config.busy = false;
        respond(&mut model, connected(true));
        assert!(!model.config.busy, "config is loaded only once");
    }
}
