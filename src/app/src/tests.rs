use super::*;
use crux_core::testing::AppTester;
use crux_http::protocol::{HttpResponse, HttpResult as HttpOutput};

/// Answer the Http request of `command` and return the event it produces
fn answer_http(mut command: Command<Effect, Event>, response: HttpResponse) -> Event {
    let mut request = command
        .effects()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("command should request Http");

    request
        .resolve(HttpOutput::Ok(response))
        .expect("request should resolve");

    command.events().next().expect("response should produce an event")
}

/// Run a scan up to the result request, answering it with `response`
fn scan_answered_with(response: HttpResponse) -> Model {
    let mut model = Model::default();

    let start = update::update(Event::Wifi(WifiEvent::StartScan), &mut model);
    let ack = answer_http(start, HttpResponse::ok().body(r#"{"status":"ok"}"#).build());
    let _command = update::update(ack, &mut model);

    let fetch = update::update(Event::Wifi(WifiEvent::ScanSettled), &mut model);
    let result = answer_http(fetch, response);
    let _command = update::update(result, &mut model);

    model
}

fn ok(body: &str) -> events::DeviceResult {
    Ok(RawResponse::new(200, body))
}

#[test]
fn test_startup_loads_config_after_first_status() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize(Capabilities::default()), &mut model);
    assert!(!model.config.busy);

    let _command = app.update(
        Event::Status(StatusEvent::Response(ok(r#"{"network":{"connected":false}}"#))),
        &mut model,
    );
    assert!(model.config.busy);
    assert_eq!(model.startup, Startup::Running);

    let _command = app.update(
        Event::Config(ConfigEvent::LoadResponse(ok(
            r#"{"name":"Porch","blinking_ms":1000,"wifi_ssid":"","wifi_pass":""}"#,
        ))),
        &mut model,
    );
    assert_eq!(model.config.form.name, "Porch");
    assert_eq!(model.status_text.as_deref(), Some("Configuration loaded."));
}

#[test]
fn test_config_timeout_uses_defaults() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Config(ConfigEvent::Load), &mut model);
    let _command = app.update(
        Event::Config(ConfigEvent::LoadResponse(Err(RequestError::Transport(
            "timeout".to_string(),
        )))),
        &mut model,
    );

    assert_eq!(model.config.form.name, "Web-Host-MCU");
    assert_eq!(model.config.form.blinking_ms, "250");
    assert_eq!(model.config.form.wifi_ssid, "");
    assert_eq!(model.config.form.wifi_pass, "");
    assert_eq!(
        model.status_text.as_deref(),
        Some("Failed to load configuration, using defaults.")
    );
}

#[test]
fn test_connected_status_hides_wifi_panel() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::Status(StatusEvent::Response(ok(r#"{"network":{"connected":true}}"#))),
        &mut model,
    );

    assert!(!model.wifi_panel_visible());
    assert_eq!(model.status.indicator, ConnectionIndicator::Connected);
}

#[test]
fn test_scan_and_select_open_network() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Wifi(WifiEvent::StartScan), &mut model);
    let _command = app.update(
        Event::Wifi(WifiEvent::ScanStartResponse(ok(r#"{"status":"ok"}"#))),
        &mut model,
    );
    let _command = app.update(Event::Wifi(WifiEvent::ScanSettled), &mut model);
    let _command = app.update(
        Event::Wifi(WifiEvent::ScanResultResponse(ok(
            r#"{"status":"ok","stations":[{"ssid":"Cafe","rssi":-61,"auth":"OPEN"}]}"#,
        ))),
        &mut model,
    );

    assert_eq!(model.wifi.scan, ScanState::Ready { count: 1 });
    assert_eq!(model.wifi.dropdown[0].signal, SignalQuality::Fair);

    let _command = app.update(
        Event::Wifi(WifiEvent::SelectStation { index: 0 }),
        &mut model,
    );
    let _command = app.update(
        Event::Config(ConfigEvent::EditPassword("ignored".to_string())),
        &mut model,
    );

    assert_eq!(model.config.form.wifi_ssid, "Cafe");
    assert!(model.wifi.password.disabled);
    assert_eq!(model.config.form.wifi_pass, "");
}

#[test]
fn test_view_mirrors_model() {
    let app = App;
    let model = Model {
        status_text: Some("Configuration saved successfully.".to_string()),
        ..Default::default()
    };

    assert_eq!(crux_core::App::view(&app, &model), model);
}

#[test]
fn test_scan_conflict_reports_not_started() {
    let model = scan_answered_with(HttpResponse::status(409).body("scan not started").build());

    assert_eq!(
        model.wifi.scan,
        ScanState::Error {
            message: "Scan not started.".to_string()
        }
    );
    assert!(!model.wifi.loader.is_visible());
}

#[test]
fn test_scan_too_early_reports_not_ready() {
    let model = scan_answered_with(HttpResponse::status(425).build());

    assert_eq!(
        model.wifi.scan,
        ScanState::Error {
            message: "Scan not ready yet.".to_string()
        }
    );
    assert_eq!(model.status_text.as_deref(), Some("Scan not ready yet."));
}

#[test]
fn test_server_error_is_a_protocol_error() {
    let mut model = Model::default();

    let poll = update::update(Event::Status(StatusEvent::Tick), &mut model);
    let event = answer_http(poll, HttpResponse::status(503).build());

    assert_eq!(
        event,
        Event::Status(StatusEvent::Response(Ok(RawResponse::new(503, ""))))
    );
}
