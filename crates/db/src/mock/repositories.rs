use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;
use vetslot_core::models::schedule::ClinicSchedule;

use crate::models::{BookingInsert, DbBooking, DbClinic, NewBooking};

// Mock repositories for testing
mock! {
    pub ClinicRepo {
        pub async fn create_clinic(
            &self,
            name: &'static str,
            address: Option<&'static str>,
            schedule: ClinicSchedule,
        ) -> eyre::Result<DbClinic>;

        pub async fn get_clinic_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbClinic>>;

        pub async fn list_clinics(&self) -> eyre::Result<Vec<DbClinic>>;

        pub async fn update_clinic_schedule(
            &self,
            id: Uuid,
            schedule: ClinicSchedule,
        ) -> eyre::Result<Option<DbClinic>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            booking: NewBooking,
        ) -> eyre::Result<BookingInsert>;

        pub async fn get_bookings_for_day(
            &self,
            clinic_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn cancel_booking(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
