use crate::{models::DbClinic, repositories::minute_column};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use vetslot_core::models::schedule::ClinicSchedule;

pub async fn create_clinic(
    pool: &Pool<Postgres>,
    name: &str,
    address: Option<&str>,
    schedule: &ClinicSchedule,
) -> Result<DbClinic> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating clinic: id={}, name={}", id, name);

    let clinic = sqlx::query_as::<_, DbClinic>(
        r#"
        INSERT INTO clinics (id, name, address, open_minute, close_minute,
                             break_start_minute, break_end_minute, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, name, address, open_minute, close_minute,
                  break_start_minute, break_end_minute, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(address)
    .bind(minute_column(schedule.open())?)
    .bind(minute_column(schedule.close())?)
    .bind(minute_column(schedule.break_start())?)
    .bind(minute_column(schedule.break_end())?)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(clinic)
}

pub async fn get_clinic_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbClinic>> {
    tracing::debug!("Getting clinic by id: {}", id);

    let clinic = sqlx::query_as::<_, DbClinic>(
        r#"
        SELECT id, name, address, open_minute, close_minute,
               break_start_minute, break_end_minute, created_at
        FROM clinics
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(clinic)
}

pub async fn list_clinics(pool: &Pool<Postgres>) -> Result<Vec<DbClinic>> {
    let clinics = sqlx::query_as::<_, DbClinic>(
        r#"
        SELECT id, name, address, open_minute, close_minute,
               break_start_minute, break_end_minute, created_at
        FROM clinics
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(clinics)
}

/// Replaces a clinic's schedule. Returns `None` when the clinic does not exist.
pub async fn update_clinic_schedule(
    pool: &Pool<Postgres>,
    id: Uuid,
    schedule: &ClinicSchedule,
) -> Result<Option<DbClinic>> {
    tracing::debug!("Updating schedule of clinic {}", id);

    let clinic = sqlx::query_as::<_, DbClinic>(
        r#"
        UPDATE clinics
        SET open_minute = $2, close_minute = $3,
            break_start_minute = $4, break_end_minute = $5
        WHERE id = $1
        RETURNING id, name, address, open_minute, close_minute,
                  break_start_minute, break_end_minute, created_at
        "#,
    )
    .bind(id)
    .bind(minute_column(schedule.open())?)
    .bind(minute_column(schedule.close())?)
    .bind(minute_column(schedule.break_start())?)
    .bind(minute_column(schedule.break_end())?)
    .fetch_optional(pool)
    .await?;

    Ok(clinic)
}
