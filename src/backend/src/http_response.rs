use crate::device::ScanOutcome;
use actix_web::{HttpResponse, http::StatusCode};
use anyhow::Result;
use log::error;
use serde::Serialize;
use web_host_core::types::{ConfigRecord, Measurement, ScanAck, ScanResults, StatusSnapshot};

/// Trait for converting service results into HTTP responses
pub trait ServiceResultResponse {
    fn into_response(self) -> HttpResponse;
}

/// Body of every accepted write
fn ok_ack() -> HttpResponse {
    json_response(StatusCode::OK, &ScanAck::ok(), "acknowledgment")
}

fn json_response<T: Serialize>(status: StatusCode, value: &T, what: &str) -> HttpResponse {
    match serde_json::to_string(value) {
        Ok(json) => HttpResponse::build(status)
            .content_type("application/json")
            .body(json),
        Err(e) => {
            error!("failed to serialize {what}: {e:#}");
            HttpResponse::InternalServerError().body("failed to serialize response")
        }
    }
}

/// `425 Too Early`, which has no named constant in actix-web's `StatusCode`
fn too_early(body: &'static str) -> HttpResponse {
    match StatusCode::from_u16(425) {
        Ok(status) => HttpResponse::build(status).body(body),
        Err(e) => {
            error!("failed to build status 425: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

impl ServiceResultResponse for () {
    fn into_response(self) -> HttpResponse {
        ok_ack()
    }
}

impl ServiceResultResponse for ConfigRecord {
    fn into_response(self) -> HttpResponse {
        json_response(StatusCode::OK, &self, "ConfigRecord")
    }
}

impl ServiceResultResponse for StatusSnapshot {
    fn into_response(self) -> HttpResponse {
        json_response(StatusCode::OK, &self, "StatusSnapshot")
    }
}

impl ServiceResultResponse for Vec<Measurement> {
    fn into_response(self) -> HttpResponse {
        json_response(StatusCode::OK, &self, "measurements")
    }
}

impl ServiceResultResponse for ScanOutcome {
    fn into_response(self) -> HttpResponse {
        match self {
            ScanOutcome::NotStarted => HttpResponse::Conflict().body("scan not started"),
            ScanOutcome::Pending => too_early("scan not ready"),
            ScanOutcome::Ready(stations) => json_response(
                StatusCode::OK,
                &ScanResults {
                    status: "ok".to_string(),
                    stations: Some(stations),
                },
                "ScanResults",
            ),
        }
    }
}

/// Handle Result and convert data to Response
///
/// Successful results are turned into their response; errors are logged and
/// answered with `500 Internal Server Error`.
///
/// # Arguments
/// * `result` - The Result to handle
/// * `operation` - Context message describing the operation
pub fn handle_service_result<T>(result: Result<T>, operation: &str) -> HttpResponse
where
    T: ServiceResultResponse,
{
    match result {
        Ok(data) => data.into_response(),
        Err(e) => {
            error!("{operation} failed: {e:#}");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn scan_outcomes_map_to_status_codes() {
        assert_eq!(
            ScanOutcome::NotStarted.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ScanOutcome::Pending.into_response().status().as_u16(),
            425
        );
        assert_eq!(
            ScanOutcome::Ready(vec![]).into_response().status(),
            StatusCode::OK
        );
    }

    #[test]
    fn errors_become_internal_server_error() {
        let response = handle_service_result::<()>(Err(anyhow!("disk full")), "save");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
