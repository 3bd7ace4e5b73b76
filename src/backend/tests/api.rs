#![cfg(feature = "mock")]

use actix_web::{App, dev::ServiceResponse, http::StatusCode, test, web};
use anyhow::anyhow;
use serde_json::{Value, json};
use web_host_core::types::{ConfigRecord, WifiStation};
use web_host_sim::{api::Api, device::ScanOutcome};

#[mockall_double::double]
use web_host_sim::device::DeviceService;

async fn call(api: Api<DeviceService>, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(api))
            .configure(Api::<DeviceService>::configure),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}

fn post_config(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/api/config").set_json(body)
}

#[tokio::test]
async fn config_is_served_as_json() {
    let mut device = DeviceService::default();
    device.expect_config().returning(|| {
        Box::pin(async {
            Ok(ConfigRecord {
                name: "Porch".to_string(),
                ..Default::default()
            })
        })
    });

    let resp = call(Api::new(device), test::TestRequest::get().uri("/api/config")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Porch");
    assert_eq!(body["blinking_ms"], 250);
}

#[tokio::test]
async fn valid_config_is_stored() {
    let mut device = DeviceService::default();
    device
        .expect_set_config()
        .withf(|config| config.name == "Kitchen" && config.blinking_ms == 500)
        .times(1)
        .returning(|_| Box::pin(async { Ok(()) }));

    let resp = call(
        Api::new(device),
        post_config(json!({
            "name": "Kitchen",
            "blinking_ms": 500,
            "wifi_ssid": "HomeNet",
            "wifi_pass": "secret"
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    for body in [
        json!({ "name": "x".repeat(64), "blinking_ms": 250 }),
        json!({ "name": "", "blinking_ms": 250 }),
        json!({ "name": "Kitchen", "blinking_ms": 70000 }),
        json!({ "name": "Kitchen" }),
    ] {
        let mut device = DeviceService::default();
        device.expect_set_config().never();

        let resp = call(Api::new(device), post_config(body)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn scan_outcomes_use_status_codes() {
    for (outcome, expected) in [
        (ScanOutcome::NotStarted, 409),
        (ScanOutcome::Pending, 425),
        (ScanOutcome::Ready(vec![WifiStation::default()]), 200),
    ] {
        let mut device = DeviceService::default();
        device
            .expect_scan_result()
            .returning(move || {
                let outcome = outcome.clone();
                Box::pin(async move { Ok(outcome) })
            });

        let resp = call(
            Api::new(device),
            test::TestRequest::get().uri("/api/wifi-scan-get"),
        )
        .await;
        assert_eq!(resp.status().as_u16(), expected);
    }
}

#[tokio::test]
async fn scan_start_acknowledges() {
    let mut device = DeviceService::default();
    device
        .expect_start_scan()
        .times(1)
        .returning(|| Box::pin(async { Ok(()) }));

    let resp = call(
        Api::new(device),
        test::TestRequest::get().uri("/api/wifi-scan-start"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn device_failures_are_internal_errors() {
    let mut device = DeviceService::default();
    device
        .expect_status()
        .returning(|| Box::pin(async { Err(anyhow!("sensor bus stuck")) }));

    let resp = call(Api::new(device), test::TestRequest::get().uri("/api/status")).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
