use crate::{
    device::DeviceService,
    http_response::handle_service_result,
};
use actix_web::{HttpResponse, Responder, web};
use log::{debug, warn};
use serde_valid::Validate;
use web_host_core::types::ConfigRecord;

/// HTTP surface of the device, generic over the device implementation
#[derive(Clone)]
pub struct Api<Device>
where
    Device: DeviceService,
{
    pub device: Device,
}

impl<Device> Api<Device>
where
    Device: DeviceService + 'static,
{
    pub fn new(device: Device) -> Self {
        Api { device }
    }

    /// Register the device API routes
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/api")
                .route("/config", web::get().to(Self::config))
                .route("/config", web::post().to(Self::set_config))
                .route("/status", web::get().to(Self::status))
                .route("/meas", web::get().to(Self::measurements))
                .route("/wifi-scan-start", web::get().to(Self::start_scan))
                .route("/wifi-scan-get", web::get().to(Self::scan_result)),
        );
    }

    pub async fn config(api: web::Data<Self>) -> impl Responder {
        debug!("config() called");
        handle_service_result(api.device.config().await, "config")
    }

    pub async fn set_config(
        body: web::Json<ConfigRecord>,
        api: web::Data<Self>,
    ) -> impl Responder {
        debug!("set_config() called: {body:?}");

        let config = body.into_inner();
        if let Err(e) = config.validate() {
            warn!("rejecting configuration: {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }

        handle_service_result(api.device.set_config(config).await, "set_config")
    }

    pub async fn status(api: web::Data<Self>) -> impl Responder {
        handle_service_result(api.device.status().await, "status")
    }

    pub async fn measurements(api: web::Data<Self>) -> impl Responder {
        handle_service_result(api.device.measurements().await, "measurements")
    }

    pub async fn start_scan(api: web::Data<Self>) -> impl Responder {
        debug!("start_scan() called");
        handle_service_result(api.device.start_scan().await, "start_scan")
    }

    pub async fn scan_result(api: web::Data<Self>) -> impl Responder {
        debug!("scan_result() called");
        handle_service_result(api.device.scan_result().await, "scan_result")
    }
}
