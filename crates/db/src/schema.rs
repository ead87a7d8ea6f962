use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create clinics table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clinics (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            address VARCHAR(512) NULL,
            open_minute INTEGER NOT NULL,
            close_minute INTEGER NOT NULL,
            break_start_minute INTEGER NOT NULL,
            break_end_minute INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_schedule CHECK (
                open_minute < break_start_minute
                AND break_start_minute < break_end_minute
                AND break_end_minute < close_minute
                AND close_minute <= 1440
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            clinic_id UUID NOT NULL REFERENCES clinics(id),
            pet_name VARCHAR(255) NOT NULL,
            owner_name VARCHAR(255) NOT NULL,
            service VARCHAR(32) NOT NULL,
            booking_date DATE NOT NULL,
            start_minute INTEGER NOT NULL,
            duration_minutes INTEGER NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'confirmed',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_duration CHECK (duration_minutes > 0),
            CONSTRAINT valid_status CHECK (status IN ('confirmed', 'cancelled'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_bookings_clinic_date ON bookings(clinic_id, booking_date)",
        "CREATE INDEX IF NOT EXISTS idx_clinics_name ON clinics(name)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
