use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use vetslot_core::{
    errors::{VetError, VetResult},
    models::{
        clinic::{ClinicResponse, CreateClinicRequest, ListClinicsResponse, UpdateScheduleResponse},
        schedule::{ClinicSchedule, ScheduleDto},
    },
};
use vetslot_db::models::DbClinic;

use crate::{middleware::error_handling::AppError, ApiState};

/// Trims a clinic name and rejects blank ones.
pub fn validate_clinic_name(name: &str) -> VetResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VetError::Validation("Clinic name must not be empty".to_string()));
    }
    Ok(name)
}

pub fn clinic_response(clinic: &DbClinic) -> VetResult<ClinicResponse> {
    let schedule = clinic.schedule()?;

    Ok(ClinicResponse {
        id: clinic.id,
        name: clinic.name.clone(),
        address: clinic.address.clone(),
        schedule: ScheduleDto::from(&schedule),
        created_at: clinic.created_at,
    })
}

pub(crate) async fn load_clinic(state: &ApiState, id: Uuid) -> Result<DbClinic, AppError> {
    let clinic = vetslot_db::repositories::clinic::get_clinic_by_id(&state.db_pool, id)
        .await
        .map_err(VetError::Database)?
        .ok_or_else(|| VetError::NotFound(format!("Clinic with ID {} not found", id)))?;

    Ok(clinic)
}

#[axum::debug_handler]
pub async fn create_clinic(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClinicRequest>,
) -> Result<Json<ClinicResponse>, AppError> {
    let name = validate_clinic_name(&payload.name)?;
    let schedule = ClinicSchedule::try_from(&payload.schedule)?;
    let address = payload
        .address
        .as_deref()
        .map(str::trim)
        .filter(|address| !address.is_empty());

    let clinic =
        vetslot_db::repositories::clinic::create_clinic(&state.db_pool, name, address, &schedule)
            .await
            .map_err(VetError::Database)?;

    tracing::info!("Clinic created: id={}, name={}", clinic.id, clinic.name);

    Ok(Json(clinic_response(&clinic)?))
}

#[axum::debug_handler]
pub async fn list_clinics(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListClinicsResponse>, AppError> {
    let clinics = vetslot_db::repositories::clinic::list_clinics(&state.db_pool)
        .await
        .map_err(VetError::Database)?;

    let clinics = clinics
        .iter()
        .map(clinic_response)
        .collect::<VetResult<Vec<_>>>()?;

    Ok(Json(ListClinicsResponse { clinics }))
}

#[axum::debug_handler]
pub async fn get_clinic(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClinicResponse>, AppError> {
    let clinic = load_clinic(&state, id).await?;

    Ok(Json(clinic_response(&clinic)?))
}

/// Replaces the clinic's schedule. Existing bookings are kept as they are,
/// even if they now fall outside the new opening hours.
#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ScheduleDto>,
) -> Result<Json<UpdateScheduleResponse>, AppError> {
    let schedule = ClinicSchedule::try_from(&payload)?;

    let clinic =
        vetslot_db::repositories::clinic::update_clinic_schedule(&state.db_pool, id, &schedule)
            .await
            .map_err(VetError::Database)?
            .ok_or_else(|| VetError::NotFound(format!("Clinic with ID {} not found", id)))?;

    Ok(Json(UpdateScheduleResponse {
        id: clinic.id,
        schedule: ScheduleDto::from(&clinic.schedule()?),
        updated_at: Utc::now(),
    }))
}
