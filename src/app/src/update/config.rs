use crux_core::{render::render, Command};
use serde_json::Value;

use crate::events::{ConfigEvent, DeviceResult, Event};
use crate::model::Model;
use crate::types::{ConfigForm, ConfigRecord, RequestError};
use crate::{build_url, decode_json, expect_success, http_get, into_raw, update_field, Effect, HttpCmd};

pub const LOADING: &str = "Loading configuration...";
pub const LOADED: &str = "Configuration loaded.";
pub const LOAD_FAILED: &str = "Failed to load configuration, using defaults.";
pub const SAVING: &str = "Saving configuration...";
pub const SAVED: &str = "Configuration saved successfully.";
pub const SAVE_FAILED: &str = "Failed to save configuration.";

/// Handle ConfigSync events and edits of the configuration form
pub fn handle(event: ConfigEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConfigEvent::Load => load(model),
        ConfigEvent::LoadResponse(result) => handle_load_response(result, model),
        ConfigEvent::Save => save(model),
        ConfigEvent::SaveResponse(result) => handle_save_response(result, model),

        ConfigEvent::EditName(name) => update_field!(model.config.form.name, name),
        ConfigEvent::EditBlinking(raw) => update_field!(model.config.form.blinking_ms, raw),
        ConfigEvent::EditPassword(password) => {
            if model.wifi.password.disabled {
                log::debug!("password input disabled, ignoring edit");
                return Command::done();
            }
            update_field!(model.config.form.wifi_pass, password)
        }
        ConfigEvent::TogglePasswordVisibility => {
            if !model.capabilities.password_toggle {
                return Command::done();
            }
            model.wifi.password.revealed = !model.wifi.password.revealed;
            render()
        }
    }
}

/// Fetch the device configuration unless a load or save is outstanding
pub fn load(model: &mut Model) -> Command<Effect, Event> {
    if model.config.busy {
        log::debug!("configuration busy, ignoring load");
        return Command::done();
    }

    model.config.busy = true;
    model.set_status_text(LOADING);
    Command::all([
        render(),
        http_get!(Config, ConfigEvent, "/api/config", LoadResponse),
    ])
}

/// Decode a configuration body, applying the per-field defaults
pub fn decode_record(result: DeviceResult) -> Result<ConfigRecord, RequestError> {
    let document: Value = decode_json(result)?;
    ConfigRecord::from_json(&document)
        .ok_or_else(|| RequestError::Decode("configuration is not a JSON object".to_string()))
}

fn handle_load_response(result: DeviceResult, model: &mut Model) -> Command<Effect, Event> {
    model.config.busy = false;

    match decode_record(result) {
        Ok(record) => {
            log::info!("configuration loaded for '{}'", record.name);
            model.config.form = ConfigForm::from(&record);
            model.set_status_text(LOADED);
        }
        Err(e) => {
            log::warn!("loading configuration failed: {e}");
            model.config.form = ConfigForm::default();
            model.set_status_text(LOAD_FAILED);
        }
    }

    render()
}

/// Normalize the form and push the full record to the device
pub fn save(model: &mut Model) -> Command<Effect, Event> {
    if model.config.busy {
        log::debug!("configuration busy, ignoring save");
        return Command::done();
    }

    let record = model.config.form.normalize();
    model.config.form = ConfigForm::from(&record);

    match HttpCmd::post(build_url("/api/config"))
        .header("Content-Type", "application/json")
        .body_json(&record)
    {
        Ok(builder) => {
            model.config.busy = true;
            model.set_status_text(SAVING);
            Command::all([
                render(),
                builder.build().then_send(|result| {
                    Event::Config(ConfigEvent::SaveResponse(into_raw(result)))
                }),
            ])
        }
        Err(e) => {
            log::error!("failed to create save request: {e}");
            model.set_status_text(SAVE_FAILED);
            render()
        }
    }
}

fn handle_save_response(result: DeviceResult, model: &mut Model) -> Command<Effect, Event> {
    model.config.busy = false;

    match expect_success(result) {
        Ok(()) => model.set_status_text(SAVED),
        Err(e) => {
            log::warn!("saving configuration failed: {e}");
            model.set_status_text(SAVE_FAILED);
        }
    }

    render()
}
