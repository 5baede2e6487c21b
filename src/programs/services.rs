use sqlx::SqlitePool;
use tracing::info;

use super::models::{
    CreateProgramRequest, CreateProgramWorkoutRequest, Program, ProgramDetail, ProgramWorkout,
    UpdateProgramRequest,
};
use crate::common::{generate_program_id, generate_workout_id, ApiError, Validator};

pub struct ProgramsService {
    db: SqlitePool,
}

impl ProgramsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Program CRUD Operations
    // ============================================================================

    /// Get all programs, easiest first
    pub async fn get_all_programs(&self) -> Result<Vec<Program>, ApiError> {
        let programs = sqlx::query_as::<_, Program>(
            r#"
            SELECT id, name, description, level, days_per_week, duration_weeks,
                   image_url, created_at, updated_at
            FROM programs
            ORDER BY CASE level
                WHEN 'beginner' THEN 0
                WHEN 'intermediate' THEN 1
                WHEN 'advanced' THEN 2
                ELSE 3
            END, name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(programs)
    }

    /// Get a program with its workout days
    pub async fn get_program_detail(&self, program_id: &str) -> Result<ProgramDetail, ApiError> {
        let program = self.get_program_by_id(program_id).await?;

        let workouts = sqlx::query_as::<_, ProgramWorkout>(
            r#"
            SELECT id, program_id, day_index, name, focus, exercises, created_at, updated_at
            FROM program_workouts
            WHERE program_id = ?
            ORDER BY day_index ASC
            "#,
        )
        .bind(program_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(ProgramDetail { program, workouts })
    }

    /// Get program by ID
    pub async fn get_program_by_id(&self, program_id: &str) -> Result<Program, ApiError> {
        let program = sqlx::query_as::<_, Program>(
            r#"
            SELECT id, name, description, level, days_per_week, duration_weeks,
                   image_url, created_at, updated_at
            FROM programs
            WHERE id = ?
            "#,
        )
        .bind(program_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Program not found".to_string()))?;

        Ok(program)
    }

    /// Create a new program
    pub async fn create_program(&self, request: CreateProgramRequest) -> Result<Program, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let program_id = generate_program_id();
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO programs (
                id, name, description, level, days_per_week, duration_weeks,
                image_url, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&program_id)
        .bind(request.name.trim())
        .bind(&request.description)
        .bind(&request.level)
        .bind(request.days_per_week)
        .bind(request.duration_weeks)
        .bind(&request.image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("A program with this name already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!("Created program: {} ({})", request.name, program_id);

        self.get_program_by_id(&program_id).await
    }

    /// Update an existing program
    pub async fn update_program(
        &self,
        program_id: &str,
        request: UpdateProgramRequest,
    ) -> Result<Program, ApiError> {
        self.get_program_by_id(program_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        // Build dynamic update query
        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Program name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(description) = &request.description {
            updates.push("description = ?");
            params.push(description.clone());
        }

        if let Some(level) = &request.level {
            if !super::validators::PROGRAM_LEVELS.contains(&level.as_str()) {
                return Err(ApiError::ValidationError(
                    "Level must be 'beginner', 'intermediate' or 'advanced'".to_string(),
                ));
            }
            updates.push("level = ?");
            params.push(level.clone());
        }

        if let Some(days_per_week) = request.days_per_week {
            updates.push("days_per_week = ?");
            params.push(days_per_week.to_string());
        }

        if let Some(duration_weeks) = request.duration_weeks {
            updates.push("duration_weeks = ?");
            params.push(duration_weeks.to_string());
        }

        if let Some(image_url) = &request.image_url {
            updates.push("image_url = ?");
            params.push(image_url.clone());
        }

        if updates.is_empty() {
            return self.get_program_by_id(program_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now.clone());
        params.push(program_id.to_string());

        let query = format!("UPDATE programs SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("A program with this name already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!("Updated program: {}", program_id);

        self.get_program_by_id(program_id).await
    }

    /// Delete a program
    pub async fn delete_program(&self, program_id: &str) -> Result<(), ApiError> {
        self.get_program_by_id(program_id).await?;

        // CASCADE removes the program's workout days
        let result = sqlx::query("DELETE FROM programs WHERE id = ?")
            .bind(program_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Program not found".to_string()));
        }

        info!("Deleted program: {}", program_id);

        Ok(())
    }

    // ============================================================================
    // Program Workout Management
    // ============================================================================

    /// Add a workout day to a program
    pub async fn create_workout(
        &self,
        program_id: &str,
        request: CreateProgramWorkoutRequest,
    ) -> Result<ProgramWorkout, ApiError> {
        self.get_program_by_id(program_id).await?;

        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let workout_id = generate_workout_id();
        let now = chrono::Utc::now().to_rfc3339();

        let exercises_json = request
            .exercises
            .as_ref()
            .map(|entries| serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string()));

        sqlx::query(
            r#"
            INSERT INTO program_workouts (
                id, program_id, day_index, name, focus, exercises, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&workout_id)
        .bind(program_id)
        .bind(request.day_index)
        .bind(request.name.trim())
        .bind(&request.focus)
        .bind(exercises_json.as_deref())
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(
            "Created workout {} for program {}",
            workout_id, program_id
        );

        self.get_workout_by_id(&workout_id).await
    }

    /// Get a specific workout day by ID
    pub async fn get_workout_by_id(&self, workout_id: &str) -> Result<ProgramWorkout, ApiError> {
        let workout = sqlx::query_as::<_, ProgramWorkout>(
            r#"
            SELECT id, program_id, day_index, name, focus, exercises, created_at, updated_at
            FROM program_workouts
            WHERE id = ?
            "#,
        )
        .bind(workout_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        Ok(workout)
    }

    /// Delete a workout day from a program
    pub async fn delete_workout(
        &self,
        program_id: &str,
        workout_id: &str,
    ) -> Result<(), ApiError> {
        let workout = self.get_workout_by_id(workout_id).await?;

        if workout.program_id != program_id {
            return Err(ApiError::NotFound(
                "Workout not found in this program".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM program_workouts WHERE id = ?")
            .bind(workout_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        info!("Deleted workout: {}", workout_id);

        Ok(())
    }
}
