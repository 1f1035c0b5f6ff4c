use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Equality operators on text columns inside GiST exclusion constraints
    sqlx::query("CREATE EXTENSION IF NOT EXISTS btree_gist;")
        .execute(pool)
        .await?;

    // Create sessions table
    //
    // The exclusion constraints reject a second booking of a teacher or a
    // room whose [start, end) range overlaps on the same day, even when two
    // processes stage concurrently.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            subject_id VARCHAR(64) NOT NULL,
            teacher_id VARCHAR(64) NOT NULL,
            room_id VARCHAR(64) NOT NULL,
            group_code VARCHAR(64) NOT NULL,
            day VARCHAR(16) NOT NULL,
            start_minute SMALLINT NOT NULL,
            end_minute SMALLINT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_slot_range CHECK (end_minute > start_minute),
            CONSTRAINT valid_slot_grid CHECK (
                start_minute >= 420 AND end_minute <= 1260
                AND start_minute % 30 = 0 AND end_minute % 30 = 0
            ),
            CONSTRAINT valid_day CHECK (
                day IN ('MONDAY', 'TUESDAY', 'WEDNESDAY', 'THURSDAY', 'FRIDAY', 'SATURDAY')
            ),
            CONSTRAINT no_teacher_double_booking EXCLUDE USING gist (
                teacher_id WITH =,
                day WITH =,
                int4range(start_minute, end_minute) WITH &&
            ),
            CONSTRAINT no_room_double_booking EXCLUDE USING gist (
                room_id WITH =,
                day WITH =,
                int4range(start_minute, end_minute) WITH &&
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes (several statements, so sent over the simple protocol)
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_sessions_group_code ON sessions(group_code);
        CREATE INDEX IF NOT EXISTS idx_sessions_day_start ON sessions(day, start_minute);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
