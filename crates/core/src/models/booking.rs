use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{VetError, VetResult},
    models::schedule::ServiceDuration,
};

/// A span of the day that is already taken by a confirmed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedInterval {
    pub start_minute: u32,
    pub duration_minutes: u32,
}

impl BookedInterval {
    pub fn new(start_minute: u32, duration_minutes: u32) -> Self {
        Self {
            start_minute,
            duration_minutes,
        }
    }

    pub fn end_minute(&self) -> u32 {
        self.start_minute + self.duration_minutes
    }
}

/// Services a clinic can be booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Checkup,
    Vaccination,
    Grooming,
    Dental,
    Surgery,
    Consultation,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Checkup,
        ServiceKind::Vaccination,
        ServiceKind::Grooming,
        ServiceKind::Dental,
        ServiceKind::Surgery,
        ServiceKind::Consultation,
    ];

    /// How long the service is booked for when the caller gives no duration.
    pub fn default_duration(self) -> ServiceDuration {
        let minutes = match self {
            ServiceKind::Checkup => 30,
            ServiceKind::Vaccination => 15,
            ServiceKind::Grooming => 60,
            ServiceKind::Dental => 45,
            ServiceKind::Surgery => 120,
            ServiceKind::Consultation => 30,
        };
        ServiceDuration::from_catalogue(minutes)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Checkup => "checkup",
            ServiceKind::Vaccination => "vaccination",
            ServiceKind::Grooming => "grooming",
            ServiceKind::Dental => "dental",
            ServiceKind::Surgery => "surgery",
            ServiceKind::Consultation => "consultation",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = VetError;

    fn from_str(s: &str) -> VetResult<Self> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| VetError::Validation(format!("Unknown service '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = VetError;

    fn from_str(s: &str) -> VetResult<Self> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(VetError::Validation(format!(
                "Unknown booking status '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub pet_name: String,
    pub owner_name: String,
    pub service: ServiceKind,
    pub date: NaiveDate,
    /// Start time as `"HH:MM"`.
    pub start: String,
    /// Overrides the service's default duration.
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub pet_name: String,
    pub owner_name: String,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub clinic_id: Uuid,
    pub date: NaiveDate,
    pub bookings: Vec<BookingResponse>,
}
