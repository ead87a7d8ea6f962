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
        booking::{BookingResponse, CreateBookingRequest, ListBookingsResponse},
        clock::{format_clock, parse_clock},
        schedule::{ClinicSchedule, ServiceDuration},
    },
    slots::is_slot_free,
};
use vetslot_db::models::{BookingInsert, DbBooking, NewBooking};

use crate::{handlers::clinic::load_clinic, middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub date: NaiveDate,
}

fn required(value: &str, field: &str) -> VetResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(VetError::Validation(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}

/// Validates a booking request and turns it into the values to insert.
///
/// The duration falls back to the service's default. The start time is
/// checked against opening hours and the break here; overlap with other
/// bookings is checked when the row is written.
pub fn prepare_booking(
    clinic_id: Uuid,
    schedule: &ClinicSchedule,
    request: &CreateBookingRequest,
) -> VetResult<NewBooking> {
    let pet_name = required(&request.pet_name, "pet_name")?;
    let owner_name = required(&request.owner_name, "owner_name")?;
    let start_minute = parse_clock(&request.start)?;
    let duration = match request.duration_minutes {
        Some(minutes) => ServiceDuration::new(minutes)?,
        None => request.service.default_duration(),
    };

    if !is_slot_free(schedule, start_minute, duration, &[]) {
        return Err(VetError::Validation(format!(
            "{} for {} minutes is outside opening hours or overlaps the break",
            format_clock(start_minute),
            duration.minutes()
        )));
    }

    Ok(NewBooking {
        clinic_id,
        pet_name,
        owner_name,
        service: request.service,
        booking_date: request.date,
        start_minute,
        duration_minutes: duration.minutes(),
    })
}

pub fn booking_response(booking: &DbBooking) -> VetResult<BookingResponse> {
    let interval = booking.interval()?;

    Ok(BookingResponse {
        id: booking.id,
        clinic_id: booking.clinic_id,
        pet_name: booking.pet_name.clone(),
        owner_name: booking.owner_name.clone(),
        service: booking.service()?,
        date: booking.booking_date,
        start: format_clock(interval.start_minute),
        end: format_clock(interval.end_minute()),
        duration_minutes: interval.duration_minutes,
        status: booking.status()?,
        created_at: booking.created_at,
    })
}

/// Maps the outcome of an insert to the response or a conflict error.
pub fn insert_outcome(outcome: BookingInsert, booking: &NewBooking) -> VetResult<BookingResponse> {
    match outcome {
        BookingInsert::Created(row) => booking_response(&row),
        BookingInsert::Conflict => Err(VetError::Conflict(format!(
            "{} on {} is no longer available",
            format_clock(booking.start_minute),
            booking.booking_date
        ))),
    }
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Path(clinic_id): Path<Uuid>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let clinic = load_clinic(&state, clinic_id).await?;
    let schedule = clinic.schedule()?;
    let new_booking = prepare_booking(clinic_id, &schedule, &payload)?;

    let outcome = vetslot_db::repositories::booking::create_booking(&state.db_pool, &new_booking)
        .await
        .map_err(VetError::Database)?;

    let response = insert_outcome(outcome, &new_booking)?;

    tracing::info!(
        "Booking {} created at clinic {} for {} {}",
        response.id,
        clinic_id,
        response.date,
        response.start
    );

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Path(clinic_id): Path<Uuid>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<ListBookingsResponse>, AppError> {
    load_clinic(&state, clinic_id).await?;

    let bookings =
        vetslot_db::repositories::booking::get_bookings_for_day(&state.db_pool, clinic_id, query.date)
            .await
            .map_err(VetError::Database)?;

    let bookings = bookings
        .iter()
        .map(booking_response)
        .collect::<VetResult<Vec<_>>>()?;

    Ok(Json(ListBookingsResponse {
        clinic_id,
        date: query.date,
        bookings,
    }))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = vetslot_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(VetError::Database)?
        .ok_or_else(|| VetError::NotFound(format!("Booking with ID {} not found", id)))?;

    Ok(Json(booking_response(&booking)?))
}

/// Cancels a booking, freeing its time. Repeating the call is harmless.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = vetslot_db::repositories::booking::cancel_booking(&state.db_pool, id)
        .await
        .map_err(VetError::Database)?
        .ok_or_else(|| VetError::NotFound(format!("Booking with ID {} not found", id)))?;

    tracing::info!("Booking {} cancelled", id);

    Ok(Json(booking_response(&booking)?))
}
