use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use vetslot_core::models::booking::BookingStatus;
use vetslot_db::{
    mock::repositories::{MockBookingRepo, MockClinicRepo},
    models::{DbBooking, DbClinic},
};

pub struct TestContext {
    pub clinic_repo: MockClinicRepo,
    pub booking_repo: MockBookingRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            clinic_repo: MockClinicRepo::new(),
            booking_repo: MockBookingRepo::new(),
        }
    }
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date")
}

/// 09:00-18:00, lunch 13:00-14:00.
pub fn sample_clinic() -> DbClinic {
    DbClinic {
        id: Uuid::new_v4(),
        name: "Happy Paws".to_string(),
        address: Some("12 Bark Street".to_string()),
        open_minute: 540,
        close_minute: 1080,
        break_start_minute: 780,
        break_end_minute: 840,
        created_at: Utc::now(),
    }
}

pub fn sample_booking(
    clinic_id: Uuid,
    start_minute: i32,
    duration_minutes: i32,
    status: BookingStatus,
) -> DbBooking {
    DbBooking {
        id: Uuid::new_v4(),
        clinic_id,
        pet_name: "Biscuit".to_string(),
        owner_name: "Sam".to_string(),
        service: "checkup".to_string(),
        booking_date: test_date(),
        start_minute,
        duration_minutes,
        status: status.as_str().to_string(),
        created_at: Utc::now(),
    }
}
