mod config;
mod measurements;
mod status;
mod wifi;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::{Model, Startup};
use crate::types::Capabilities;
use crate::{schedule_tick, Effect, MEASUREMENT_POLL_MS, STATUS_POLL_MS};

/// Main update dispatcher - routes events to component handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize(capabilities) => initialize(capabilities, model),
        Event::Config(event) => config::handle(event, model),
        Event::Status(event) => status::handle(event, model),
        Event::Measurement(event) => measurements::handle(event, model),
        Event::Wifi(event) => wifi::handle(event, model),
    }
}

/// Start both polling loops; the config load follows the first status response
fn initialize(capabilities: Capabilities, model: &mut Model) -> Command<Effect, Event> {
    if model.startup != Startup::NotStarted {
        log::warn!("dashboard already initialized, ignoring");
        return Command::done();
    }

    log::info!("initializing dashboard with {capabilities:?}");
    model.capabilities = capabilities;
    model.startup = Startup::AwaitingStatus;

    Command::all([
        render(),
        status::poll(model),
        measurements::poll(model),
        schedule_tick!(Status, StatusEvent, STATUS_POLL_MS),
        schedule_tick!(Measurement, MeasurementEvent, MEASUREMENT_POLL_MS),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_starts_polling_once() {
        let mut model = Model::default();
        let capabilities = Capabilities {
            wifi_scan: false,
            ..Default::default()
        };

        let _ = update(Event::Initialize(capabilities), &mut model);

        assert_eq!(model.startup, Startup::AwaitingStatus);
        assert_eq!(model.capabilities, capabilities);
        assert!(model.status.in_flight);
        assert!(model.measurements.in_flight);
        assert!(!model.config.busy, "config waits for the first status");

        model.status.in_flight = false;
        let _ = update(Event::Initialize(Capabilities::default()), &mut model);
        assert_eq!(model.capabilities, capabilities);
        assert!(!model.status.in_flight);
    }
}
