use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/clinics",
            get(handlers::clinic::list_clinics).post(handlers::clinic::create_clinic),
        )
        .route("/api/clinics/:id", get(handlers::clinic::get_clinic))
        .route(
            "/api/clinics/:id/schedule",
            put(handlers::clinic::update_schedule),
        )
}
