use crux_core::Command;
use serde_json::Value;

use crate::events::{DeviceResult, Event, MeasurementEvent};
use crate::model::Model;
use crate::types::{MeasurementList, MeasurementRow, MeasurementView};
use crate::{decode_json, http_get, schedule_tick, update_field, Effect, MEASUREMENT_POLL_MS};

/// Handle MeasurementFeed events
pub fn handle(event: MeasurementEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        MeasurementEvent::Tick => Command::all([
            schedule_tick!(Measurement, MeasurementEvent, MEASUREMENT_POLL_MS),
            poll(model),
        ]),
        MeasurementEvent::Response(result) => {
            model.measurements.in_flight = false;
            let view = render_view(result, model.capabilities.rich_measurements);
            update_field!(model.measurements.view, view)
        }
    }
}

/// Issue a measurement request unless the previous one is still outstanding
pub fn poll(model: &mut Model) -> Command<Effect, Event> {
    if model.measurements.in_flight {
        log::debug!("measurement request outstanding, skipping poll");
        return Command::done();
    }

    model.measurements.in_flight = true;
    http_get!(Measurement, MeasurementEvent, "/api/meas", Response)
}

/// Turn a measurement response into what the panel shows
pub fn render_view(result: DeviceResult, translate: bool) -> MeasurementView {
    match decode_json::<Value>(result) {
        Ok(document) => match MeasurementList::from_json(document) {
            MeasurementList::Readings(readings) => MeasurementView::Rows(
                readings
                    .iter()
                    .map(|m| MeasurementRow::render(m, translate))
                    .collect(),
            ),
            MeasurementList::Empty => MeasurementView::NoData,
        },
        Err(e) => {
            log::warn!("measurement poll failed: {e}");
            MeasurementView::Failed
        }
    }
}
