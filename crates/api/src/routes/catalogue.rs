use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use vetslot_core::models::booking::ServiceKind;

use crate::ApiState;

#[derive(Debug, Serialize)]
pub struct ServiceEntry {
    pub service: ServiceKind,
    pub default_duration_minutes: u32,
}

/// The bookable services with their default lengths.
pub fn service_catalogue() -> Vec<ServiceEntry> {
    ServiceKind::ALL
        .into_iter()
        .map(|service| ServiceEntry {
            service,
            default_duration_minutes: service.default_duration().minutes(),
        })
        .collect()
}

async fn list_services() -> Json<Vec<ServiceEntry>> {
    Json(service_catalogue())
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/api/services", get(list_services))
}
