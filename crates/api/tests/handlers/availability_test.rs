use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;
use vetslot_core::{
    errors::VetError,
    models::{
        availability::AvailabilityResponse,
        booking::{BookingStatus, ServiceKind},
        schedule::SlotStep,
    },
};

use crate::test_utils::{sample_booking, sample_clinic, test_date, TestContext};
use vetslot_api::{
    handlers::availability::{build_availability, resolve_duration, resolve_step, AvailabilityQuery},
    middleware::error_handling::AppError,
};

// Mirrors the handler with the repositories swapped for mocks
async fn availability_with_mocks(
    ctx: &mut TestContext,
    clinic_id: Uuid,
    query: AvailabilityQuery,
) -> Result<AvailabilityResponse, AppError> {
    let duration = resolve_duration(query.duration, query.service)?;
    let step = resolve_step(query.step, SlotStep::HALF_HOUR)?;

    let clinic = ctx
        .clinic_repo
        .get_clinic_by_id(clinic_id)
        .await?
        .ok_or_else(|| VetError::NotFound(format!("Clinic with ID {} not found", clinic_id)))?;

    let bookings = ctx
        .booking_repo
        .get_bookings_for_day(clinic_id, query.date)
        .await?;

    Ok(build_availability(&clinic, &bookings, query.date, duration, step)?)
}

#[test]
fn test_resolve_duration_prefers_explicit_minutes() {
    let duration = resolve_duration(Some(20), Some(ServiceKind::Surgery)).unwrap();
    assert_eq!(duration.minutes(), 20);

    let duration = resolve_duration(None, Some(ServiceKind::Surgery)).unwrap();
    assert_eq!(duration.minutes(), 120);
}

#[test]
fn test_resolve_duration_requires_something() {
    assert!(matches!(resolve_duration(None, None), Err(VetError::Validation(_))));
    assert!(matches!(resolve_duration(Some(0), None), Err(VetError::Validation(_))));
}

#[test]
fn test_resolve_step() {
    assert_eq!(resolve_step(None, SlotStep::HALF_HOUR).unwrap(), SlotStep::HALF_HOUR);
    assert_eq!(resolve_step(Some(15), SlotStep::HALF_HOUR).unwrap(), SlotStep::QUARTER_HOUR);
    assert!(resolve_step(Some(0), SlotStep::HALF_HOUR).is_err());
}

#[tokio::test]
async fn test_availability_skips_confirmed_bookings_only() {
    let mut ctx = TestContext::new();
    let clinic = sample_clinic();
    let clinic_id = clinic.id;

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .with(predicate::eq(clinic_id))
        .times(1)
        .returning(move |_| Ok(Some(clinic.clone())));

    ctx.booking_repo
        .expect_get_bookings_for_day()
        .with(predicate::eq(clinic_id), predicate::eq(test_date()))
        .times(1)
        .returning(|clinic_id, _| {
            Ok(vec![
                sample_booking(clinic_id, 600, 30, BookingStatus::Confirmed),
                sample_booking(clinic_id, 660, 60, BookingStatus::Cancelled),
            ])
        });

    let query = AvailabilityQuery {
        date: test_date(),
        duration: None,
        service: Some(ServiceKind::Checkup),
        step: None,
    };

    let response = availability_with_mocks(&mut ctx, clinic_id, query).await.unwrap();
    let starts: Vec<u32> = response.slots.iter().map(|slot| slot.start_minute).collect();

    assert_eq!(response.clinic_id, clinic_id);
    assert_eq!(response.duration_minutes, 30);
    assert_eq!(response.step_minutes, 30);
    assert_eq!(
        starts,
        vec![
            540, 570, 630, 660, 690, 720, 750, // 10:00 is booked
            840, 870, 900, 930, 960, 990, 1020, 1050,
        ]
    );
    assert_eq!(response.slots[0].start, "09:00");
    assert_eq!(response.slots[0].end, "09:30");
}

#[tokio::test]
async fn test_availability_full_day() {
    let mut ctx = TestContext::new();
    let clinic = sample_clinic();
    let clinic_id = clinic.id;

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .returning(move |_| Ok(Some(clinic.clone())));

    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(|clinic_id, _| {
            Ok(vec![sample_booking(clinic_id, 540, 540, BookingStatus::Confirmed)])
        });

    let query = AvailabilityQuery {
        date: test_date(),
        duration: Some(15),
        service: None,
        step: Some(15),
    };

    let response = availability_with_mocks(&mut ctx, clinic_id, query).await.unwrap();
    assert!(response.slots.is_empty());
}

#[tokio::test]
async fn test_availability_clinic_not_found() {
    let mut ctx = TestContext::new();
    let missing = Uuid::new_v4();

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .with(predicate::eq(missing))
        .returning(|_| Ok(None));

    let query = AvailabilityQuery {
        date: test_date(),
        duration: Some(30),
        service: None,
        step: None,
    };

    let result = availability_with_mocks(&mut ctx, missing, query).await;

    match result.unwrap_err().0 {
        VetError::NotFound(_) => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_availability_rejects_corrupt_schedule_row() {
    let mut ctx = TestContext::new();
    let mut clinic = sample_clinic();
    clinic.break_start_minute = 900;
    let clinic_id = clinic.id;

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .returning(move |_| Ok(Some(clinic.clone())));
    ctx.booking_repo
        .expect_get_bookings_for_day()
        .returning(|_, _| Ok(vec![]));

    let query = AvailabilityQuery {
        date: test_date(),
        duration: Some(30),
        service: None,
        step: None,
    };

    let result = availability_with_mocks(&mut ctx, clinic_id, query).await;

    match result.unwrap_err().0 {
        VetError::Validation(_) => {}
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_availability_database_failure() {
    let mut ctx = TestContext::new();

    ctx.clinic_repo
        .expect_get_clinic_by_id()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let query = AvailabilityQuery {
        date: test_date(),
        duration: Some(30),
        service: None,
        step: None,
    };

    let result = availability_with_mocks(&mut ctx, Uuid::new_v4(), query).await;

    match result.unwrap_err().0 {
        VetError::Database(_) => {}
        e => panic!("Expected Database error, got: {:?}", e),
    }
}
