use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::schedule::ScheduleDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClinicRequest {
    pub name: String,
    pub address: Option<String>,
    pub schedule: ScheduleDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicResponse {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub schedule: ScheduleDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListClinicsResponse {
    pub clinics: Vec<ClinicResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleResponse {
    pub id: Uuid,
    pub schedule: ScheduleDto,
    pub updated_at: DateTime<Utc>,
}
