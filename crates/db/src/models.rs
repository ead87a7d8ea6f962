use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use vetslot_core::{
    errors::{VetError, VetResult},
    models::{
        booking::{BookedInterval, BookingStatus, ServiceKind},
        clock::minute_of_day,
        schedule::{ClinicSchedule, ServiceDuration},
    },
    slots::is_slot_free,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClinic {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub open_minute: i32,
    pub close_minute: i32,
    pub break_start_minute: i32,
    pub break_end_minute: i32,
    pub created_at: DateTime<Utc>,
}

impl DbClinic {
    /// Decodes the schedule columns, rejecting rows that break the schedule
    /// invariants.
    pub fn schedule(&self) -> VetResult<ClinicSchedule> {
        ClinicSchedule::new(
            minute_of_day(self.open_minute.into(), "open_minute")?,
            minute_of_day(self.close_minute.into(), "close_minute")?,
            minute_of_day(self.break_start_minute.into(), "break_start_minute")?,
            minute_of_day(self.break_end_minute.into(), "break_end_minute")?,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub pet_name: String,
    pub owner_name: String,
    pub service: String,
    pub booking_date: NaiveDate,
    pub start_minute: i32,
    pub duration_minutes: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbBooking {
    pub fn service(&self) -> VetResult<ServiceKind> {
        self.service.parse()
    }

    pub fn status(&self) -> VetResult<BookingStatus> {
        self.status.parse()
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed.as_str()
    }

    /// The part of the day this booking occupies.
    pub fn interval(&self) -> VetResult<BookedInterval> {
        let start = minute_of_day(self.start_minute.into(), "start_minute")?;
        if self.duration_minutes <= 0 {
            return Err(VetError::Validation(format!(
                "Booking {} has non-positive duration {}",
                self.id, self.duration_minutes
            )));
        }
        let duration = minute_of_day(self.duration_minutes.into(), "duration_minutes")?;
        Ok(BookedInterval::new(start, duration))
    }
}

/// Intervals taken by the confirmed bookings in `bookings`.
pub fn confirmed_intervals(bookings: &[DbBooking]) -> VetResult<Vec<BookedInterval>> {
    bookings
        .iter()
        .filter(|booking| booking.is_confirmed())
        .map(DbBooking::interval)
        .collect()
}

/// Values for a booking that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub clinic_id: Uuid,
    pub pet_name: String,
    pub owner_name: String,
    pub service: ServiceKind,
    pub booking_date: NaiveDate,
    pub start_minute: u32,
    pub duration_minutes: u32,
}

/// Whether `booking` still fits `clinic`'s schedule next to the `existing`
/// bookings of its day. Cancelled rows in `existing` are ignored.
pub fn admits(clinic: &DbClinic, existing: &[DbBooking], booking: &NewBooking) -> VetResult<bool> {
    let schedule = clinic.schedule()?;
    let booked = confirmed_intervals(existing)?;
    let duration = ServiceDuration::new(booking.duration_minutes)?;

    Ok(is_slot_free(&schedule, booking.start_minute, duration, &booked))
}

/// Result of trying to insert a booking.
#[derive(Debug, Clone)]
pub enum BookingInsert {
    Created(DbBooking),
    /// The requested time is no longer free.
    Conflict,
}
