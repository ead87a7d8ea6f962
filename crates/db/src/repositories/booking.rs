use crate::{
    models::{admits, BookingInsert, DbBooking, DbClinic, NewBooking},
    repositories::minute_column,
};
use chrono::{NaiveDate, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use vetslot_core::models::booking::BookingStatus;

/// Inserts a booking if its time is still free.
///
/// The clinic row is locked for the duration of the transaction, so two
/// requests for overlapping times at the same clinic are checked one after
/// the other against the same set of confirmed bookings.
pub async fn create_booking(pool: &Pool<Postgres>, booking: &NewBooking) -> Result<BookingInsert> {
    let mut tx = pool.begin().await?;

    let clinic = sqlx::query_as::<_, DbClinic>(
        r#"
        SELECT id, name, address, open_minute, close_minute,
               break_start_minute, break_end_minute, created_at
        FROM clinics
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(booking.clinic_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| eyre!("Clinic {} not found", booking.clinic_id))?;

    let existing = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, clinic_id, pet_name, owner_name, service, booking_date,
               start_minute, duration_minutes, status, created_at
        FROM bookings
        WHERE clinic_id = $1 AND booking_date = $2 AND status = $3
        "#,
    )
    .bind(booking.clinic_id)
    .bind(booking.booking_date)
    .bind(BookingStatus::Confirmed.as_str())
    .fetch_all(&mut *tx)
    .await?;

    if !admits(&clinic, &existing, booking)? {
        tracing::debug!(
            "Booking conflict: clinic={}, date={}, start={}",
            booking.clinic_id,
            booking.booking_date,
            booking.start_minute
        );
        tx.rollback().await?;
        return Ok(BookingInsert::Conflict);
    }

    let created = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, clinic_id, pet_name, owner_name, service, booking_date,
                              start_minute, duration_minutes, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, clinic_id, pet_name, owner_name, service, booking_date,
                  start_minute, duration_minutes, status, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(booking.clinic_id)
    .bind(&booking.pet_name)
    .bind(&booking.owner_name)
    .bind(booking.service.as_str())
    .bind(booking.booking_date)
    .bind(minute_column(booking.start_minute)?)
    .bind(minute_column(booking.duration_minutes)?)
    .bind(BookingStatus::Confirmed.as_str())
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Booking created: id={}", created.id);
    Ok(BookingInsert::Created(created))
}

/// All bookings of one clinic on one day, cancelled ones included.
pub async fn get_bookings_for_day(
    pool: &Pool<Postgres>,
    clinic_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, clinic_id, pet_name, owner_name, service, booking_date,
               start_minute, duration_minutes, status, created_at
        FROM bookings
        WHERE clinic_id = $1 AND booking_date = $2
        ORDER BY start_minute ASC, created_at ASC
        "#,
    )
    .bind(clinic_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, clinic_id, pet_name, owner_name, service, booking_date,
               start_minute, duration_minutes, status, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Marks a booking cancelled. Cancelling an already cancelled booking returns
/// it unchanged; `None` means no such booking.
pub async fn cancel_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    tracing::debug!("Cancelling booking {}", id);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = $2
        WHERE id = $1
        RETURNING id, clinic_id, pet_name, owner_name, service, booking_date,
                  start_minute, duration_minutes, status, created_at
        "#,
    )
    .bind(id)
    .bind(BookingStatus::Cancelled.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
