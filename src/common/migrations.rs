// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created idempotently so restarts are safe. Setting RESET_DB=true
/// drops everything first for a clean local schema.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    } else {
        info!("Skipping table drop (RESET_DB not set). Tables will be created if they don't exist.");
    }

    create_user_tables(pool).await?;
    create_catalog_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Drop tables in reverse dependency order
    let tables = vec![
        "program_workouts",
        "programs",
        "exercises",
        "profiles",
        "users",
    ];

    for table in tables {
        let _ = sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await;
    }

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Users table. refresh_token holds the single most-recently-issued
    // refresh token for the account; NULL means logged out.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            name TEXT NOT NULL,
            dob TEXT,
            password_hash TEXT NOT NULL,
            refresh_token TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Profiles table - fitness profile captured during onboarding
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id TEXT PRIMARY KEY,
            goal TEXT,
            experience_level TEXT,
            height_cm REAL,
            weight_kg REAL,
            training_days_per_week INTEGER,
            equipment TEXT,
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_catalog_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Programs table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS programs (
            id TEXT PRIMARY KEY,
            name TEXT UNIQUE NOT NULL,
            description TEXT,
            level TEXT,
            days_per_week INTEGER,
            duration_weeks INTEGER,
            image_url TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Program workouts table - one row per training day of a program.
    // exercises is a JSON array: [{"exerciseId": "E_...", "sets": 3, "reps": "8-12", "restSecs": 90}, ...]
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS program_workouts (
            id TEXT PRIMARY KEY,
            program_id TEXT NOT NULL,
            day_index INTEGER NOT NULL,
            name TEXT NOT NULL,
            focus TEXT,
            exercises TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY(program_id) REFERENCES programs(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Exercises table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS exercises (
            id TEXT PRIMARY KEY,
            name TEXT UNIQUE NOT NULL,
            muscle_group TEXT NOT NULL,
            secondary_muscles TEXT,
            equipment TEXT,
            difficulty TEXT,
            instructions TEXT,
            video_url TEXT,
            image_url TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            updated_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = vec![
        "CREATE INDEX IF NOT EXISTS idx_program_workouts_program_id ON program_workouts(program_id)",
        "CREATE INDEX IF NOT EXISTS idx_exercises_muscle_group ON exercises(muscle_group)",
        "CREATE INDEX IF NOT EXISTS idx_exercises_equipment ON exercises(equipment)",
        "CREATE INDEX IF NOT EXISTS idx_programs_level ON programs(level)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}
