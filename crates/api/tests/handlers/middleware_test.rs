use axum::{body::to_bytes, http::StatusCode};
use rstest::rstest;
use serde_json::Value;
use vetslot_api::middleware::error_handling::{map_error, AppError};
use vetslot_core::errors::VetError;

#[rstest]
#[case(VetError::NotFound("Clinic not found".to_string()), StatusCode::NOT_FOUND)]
#[case(VetError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(VetError::Conflict("Slot taken".to_string()), StatusCode::CONFLICT)]
#[case(VetError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    VetError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: VetError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_is_json() {
    let response = map_error(VetError::Conflict("10:30 on 2024-03-14 is no longer available".to_string()));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        body["error"],
        "Conflict: 10:30 on 2024-03-14 is no longer available"
    );
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let err: AppError = eyre::eyre!("pool closed").into();

    assert!(matches!(err.0, VetError::Database(_)));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
