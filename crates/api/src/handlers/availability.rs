//! # Availability Handlers
//!
//! Answers "when can I bring my pet in?" for one clinic and one day.
//!
//! The handler loads the clinic's schedule and the day's confirmed bookings,
//! then hands them to [`vetslot_core::slots::compute_slots`]. Every booking
//! screen goes through this endpoint, so the slot rules live in exactly one
//! place.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use vetslot_core::{
    errors::{VetError, VetResult},
    models::{
        availability::{AvailabilityResponse, SlotResponse},
        booking::ServiceKind,
        schedule::{ServiceDuration, SlotStep},
    },
    slots::compute_slots,
};
use vetslot_db::models::{confirmed_intervals, DbBooking, DbClinic};

use crate::{handlers::clinic::load_clinic, middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability endpoint
///
/// # Fields
///
/// * `date` - Day to look at, `YYYY-MM-DD`
/// * `duration` - Service length in minutes; takes precedence over `service`
/// * `service` - Service kind whose default duration is used
/// * `step` - Slot spacing in minutes (default: server configuration)
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub duration: Option<u32>,
    pub service: Option<ServiceKind>,
    pub step: Option<u32>,
}

/// Picks the service length: explicit minutes win over the service default.
pub fn resolve_duration(
    duration: Option<u32>,
    service: Option<ServiceKind>,
) -> VetResult<ServiceDuration> {
    match (duration, service) {
        (Some(minutes), _) => ServiceDuration::new(minutes),
        (None, Some(service)) => Ok(service.default_duration()),
        (None, None) => Err(VetError::Validation(
            "Either duration or service must be provided".to_string(),
        )),
    }
}

pub fn resolve_step(step: Option<u32>, default: SlotStep) -> VetResult<SlotStep> {
    step.map(SlotStep::new).transpose().map(|step| step.unwrap_or(default))
}

/// Builds the availability response from already loaded rows.
///
/// Cancelled bookings in `bookings` are ignored.
pub fn build_availability(
    clinic: &DbClinic,
    bookings: &[DbBooking],
    date: NaiveDate,
    duration: ServiceDuration,
    step: SlotStep,
) -> VetResult<AvailabilityResponse> {
    let schedule = clinic.schedule()?;
    let booked = confirmed_intervals(bookings)?;

    let slots = compute_slots(&schedule, duration, &booked, step)
        .into_iter()
        .map(|start| SlotResponse::new(start, duration.minutes()))
        .collect();

    Ok(AvailabilityResponse {
        clinic_id: clinic.id,
        date,
        duration_minutes: duration.minutes(),
        step_minutes: step.minutes(),
        slots,
    })
}

/// Lists bookable start times for a clinic on a given day
///
/// # Endpoint
///
/// ```text
/// GET /api/clinics/:id/availability?date=2024-03-14&service=checkup&step=15
/// ```
///
/// # Errors
///
/// * `VetError::Validation` - Neither duration nor service given, zero step or duration
/// * `VetError::NotFound` - Clinic does not exist
/// * `VetError::Database` - Database error
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(clinic_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let duration = resolve_duration(query.duration, query.service)?;
    let step = resolve_step(query.step, state.slot_step)?;

    let clinic = load_clinic(&state, clinic_id).await?;

    let bookings =
        vetslot_db::repositories::booking::get_bookings_for_day(&state.db_pool, clinic_id, query.date)
            .await
            .map_err(VetError::Database)?;

    let response = build_availability(&clinic, &bookings, query.date, duration, step)?;

    tracing::debug!(
        "Availability for clinic {} on {}: {} slots",
        clinic_id,
        query.date,
        response.slots.len()
    );

    Ok(Json(response))
}
