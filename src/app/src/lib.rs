pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::timer::{TimerOperation, TimerOutput},
    events::{ConfigEvent, Event, MeasurementEvent, StatusEvent, WifiEvent},
    http_helpers::{build_url, decode_json, expect_success, into_raw, BASE_URL},
    model::{Model, Startup},
    types::*,
};
pub use crux_http::Result as HttpResult;

/// Status poll cadence
pub const STATUS_POLL_MS: u64 = 1200;
/// Measurement poll cadence
pub const MEASUREMENT_POLL_MS: u64 = 1000;
/// Delay between an acknowledged scan start and the result poll
pub const SCAN_SETTLE_MS: u64 = 3000;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Timer(TimerOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
