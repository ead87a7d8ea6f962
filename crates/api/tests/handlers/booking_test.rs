use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;
use vetslot_core::{
    errors::VetError,
    models::{
        booking::{BookingResponse, BookingStatus, CreateBookingRequest, ServiceKind},
        schedule::ClinicSchedule,
    },
};
use vetslot_db::models::{BookingInsert, NewBooking};

use crate::test_utils::{sample_booking, sample_clinic, test_date, TestContext};
use vetslot_api::{
    handlers::booking::{booking_response, insert_outcome, prepare_booking},
    middleware::error_handling::AppError,
};

fn schedule() -> ClinicSchedule {
    sample_clinic().schedule().unwrap()
}

fn request(service: ServiceKind, start: &str, duration_minutes: Option<u32>) -> CreateBookingRequest {
    CreateBookingRequest {
        pet_name: "Biscuit".to_string(),
        owner_name: "Sam".to_string(),
        service,
        date: test_date(),
        start: start.to_string(),
        duration_minutes,
    }
}

async fn create_with_mocks(
    ctx: &mut TestContext,
    clinic_id: Uuid,
    payload: CreateBookingRequest,
) -> Result<BookingResponse, AppError> {
    let clinic = ctx
        .clinic_repo
        .get_clinic_by_id(clinic_id)
        .await?
        .ok_or_else(|| VetError::NotFound(format!("Clinic with ID {} not found", clinic_id)))?;
    let new_booking = prepare_booking(clinic_id, &clinic.schedule()?, &payload)?;

    let outcome = ctx.booking_repo.create_booking(new_booking.clone()).await?;

    Ok(insert_outcome(outcome, &new_booking)?)
}

#[test]
fn test_prepare_booking_uses_service_default_duration() {
    let clinic_id = Uuid::new_v4();
    let booking = prepare_booking(clinic_id, &schedule(), &request(ServiceKind::Dental, "10:30", None)).unwrap();

    assert_eq!(
        booking,
        NewBooking {
            clinic_id,
            pet_name: "Biscuit".to_string(),
            owner_name: "Sam".to_string(),
            service: ServiceKind::Dental,
            booking_date: test_date(),
            start_minute: 630,
            duration_minutes: 45,
        }
    );
}

#[test]
fn test_prepare_booking_explicit_duration_and_trimmed_names() {
    let mut payload = request(ServiceKind::Grooming, "14:00", Some(90));
    payload.pet_name = "  Biscuit ".to_string();

    let booking = prepare_booking(Uuid::new_v4(), &schedule(), &payload).unwrap();

    assert_eq!(booking.pet_name, "Biscuit");
    assert_eq!(booking.start_minute, 840);
    assert_eq!(booking.duration_minutes, 90);
}

#[rstest]
#[case::straddles_break(ServiceKind::Checkup, "12:45", None)]
#[case::runs_past_close(ServiceKind::Grooming, "17:30", None)]
#[case::before_opening(ServiceKind::Vaccination, "08:45", None)]
#[case::bad_clock(ServiceKind::Checkup, "half past ten", None)]
#[case::zero_duration(ServiceKind::Checkup, "10:00", Some(0))]
fn test_prepare_booking_rejects(
    #[case] service: ServiceKind,
    #[case] start: &str,
    #[case] duration: Option<u32>,
) {
    let result = prepare_booking(Uuid::new_v4(), &schedule(), &request(service, start, duration));
    assert!(matches!(result, Err(VetError::Validation(_))));
}

#[test]
fn test_prepare_booking_rejects_blank_owner() {
    let mut payload = request(ServiceKind::Checkup, "10:00", None);
    payload.owner_name = "   ".to_string();

    let err = prepare_booking(Uuid::new_v4(), &schedule(), &payload).unwrap_err();
    assert!(err.to_string().contains("owner_name"));
}

#[test]
fn test_prepare_booking_allows_slot_ending_at_close() {
    let booking = prepare_booking(Uuid::new_v4(), &schedule(), &request(ServiceKind::Checkup, "17:30", None));
    assert!(booking.is_ok());
}

#[test]
fn test_booking_response_formats_times() {
    let row = sample_booking(Uuid::new_v4(), 630, 45, BookingStatus::Confirmed);
    let response = booking_response(&row).unwrap();

    assert_eq!(response.start, "10:30");
    assert_eq!(response.end, "11:15");
    assert_eq!(response.duration_minutes, 45);
    assert_eq!(response.service, ServiceKind::Checkup);
    assert_eq!(response.status, BookingStatus::Confirmed);
}

#[test]
fn test_booking_response_rejects_unknown_service() {
    let mut row = sample_booking(Uuid::new_v4(), 630, 45, BookingStatus::Confirmed);
    row.service = "acupuncture".to_string();

    assert!(booking_response(&row).is_err());
}

#[tokio::test]
async fn test_create_booking_success() {
    let mut ctx = TestContext::new();
    let clinic = sample_clinic();
    let clinic_id = clinic.id;

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .with(predicate::eq(clinic_id))
        .returning(move |_| Ok(Some(clinic.clone())));

    ctx.booking_repo
        .expect_create_booking()
        .withf(move |booking| booking.clinic_id == clinic_id && booking.start_minute == 600)
        .times(1)
        .returning(|booking| {
            Ok(BookingInsert::Created(sample_booking(
                booking.clinic_id,
                booking.start_minute as i32,
                booking.duration_minutes as i32,
                BookingStatus::Confirmed,
            )))
        });

    let response = create_with_mocks(&mut ctx, clinic_id, request(ServiceKind::Checkup, "10:00", None))
        .await
        .unwrap();

    assert_eq!(response.clinic_id, clinic_id);
    assert_eq!(response.start, "10:00");
    assert_eq!(response.end, "10:30");
}

#[tokio::test]
async fn test_create_booking_conflict() {
    let mut ctx = TestContext::new();
    let clinic = sample_clinic();
    let clinic_id = clinic.id;

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .returning(move |_| Ok(Some(clinic.clone())));

    ctx.booking_repo
        .expect_create_booking()
        .times(1)
        .returning(|_| Ok(BookingInsert::Conflict));

    let err = create_with_mocks(&mut ctx, clinic_id, request(ServiceKind::Checkup, "10:30", None))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::CONFLICT);
    match err.0 {
        VetError::Conflict(message) => assert!(message.contains("10:30")),
        e => panic!("Expected Conflict error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_create_booking_invalid_request_never_hits_insert() {
    let mut ctx = TestContext::new();
    let clinic = sample_clinic();
    let clinic_id = clinic.id;

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .returning(move |_| Ok(Some(clinic.clone())));
    ctx.booking_repo.expect_create_booking().never();

    let err = create_with_mocks(&mut ctx, clinic_id, request(ServiceKind::Checkup, "13:15", None))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cancel_booking_renders_cancelled_row() {
    let mut ctx = TestContext::new();
    let clinic_id = Uuid::new_v4();
    let booking = sample_booking(clinic_id, 600, 30, BookingStatus::Cancelled);
    let booking_id = booking.id;

    ctx.booking_repo
        .expect_cancel_booking()
        .with(predicate::eq(booking_id))
        .times(1)
        .returning(move |_| Ok(Some(booking.clone())));

    let row = ctx.booking_repo.cancel_booking(booking_id).await.unwrap().unwrap();
    let response = booking_response(&row).unwrap();

    assert_eq!(response.id, booking_id);
    assert_eq!(response.status, BookingStatus::Cancelled);
    assert_eq!(response.start, "10:00");
}
