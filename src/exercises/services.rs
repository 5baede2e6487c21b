use sqlx::SqlitePool;
use tracing::info;

use super::models::{
    CreateExerciseRequest, Exercise, ListExercisesQuery, UpdateExerciseRequest,
};
use crate::common::{generate_exercise_id, ApiError, Validator};

pub struct ExercisesService {
    db: SqlitePool,
}

impl ExercisesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List exercises, optionally filtered by muscle group, equipment, and a
    /// name search term
    pub async fn list_exercises(
        &self,
        filter: &ListExercisesQuery,
    ) -> Result<Vec<Exercise>, ApiError> {
        let mut conditions = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(muscle_group) = &filter.muscle_group {
            conditions.push("muscle_group = ?");
            params.push(muscle_group.to_lowercase());
        }

        if let Some(equipment) = &filter.equipment {
            conditions.push("equipment = ?");
            params.push(equipment.to_lowercase());
        }

        if let Some(q) = &filter.q {
            if q.len() > 100 {
                return Err(ApiError::BadRequest(
                    "Search term must not exceed 100 characters".to_string(),
                ));
            }
            conditions.push("name LIKE ?");
            params.push(format!("%{}%", q));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            r#"
            SELECT id, name, muscle_group, secondary_muscles, equipment, difficulty,
                   instructions, video_url, image_url, created_at, updated_at
            FROM exercises{}
            ORDER BY name ASC
            "#,
            where_clause
        );

        let mut query_builder = sqlx::query_as::<_, Exercise>(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        let exercises = query_builder
            .fetch_all(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(exercises)
    }

    /// Get exercise by ID
    pub async fn get_exercise_by_id(&self, exercise_id: &str) -> Result<Exercise, ApiError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, name, muscle_group, secondary_muscles, equipment, difficulty,
                   instructions, video_url, image_url, created_at, updated_at
            FROM exercises
            WHERE id = ?
            "#,
        )
        .bind(exercise_id)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Ok(exercise)
    }

    /// Create a new exercise
    pub async fn create_exercise(
        &self,
        request: CreateExerciseRequest,
    ) -> Result<Exercise, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let exercise_id = generate_exercise_id();
        let now = chrono::Utc::now().to_rfc3339();

        let secondary_muscles_json = request
            .secondary_muscles
            .as_ref()
            .map(|items| serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string()));

        sqlx::query(
            r#"
            INSERT INTO exercises (
                id, name, muscle_group, secondary_muscles, equipment, difficulty,
                instructions, video_url, image_url, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&exercise_id)
        .bind(request.name.trim())
        .bind(request.muscle_group.to_lowercase())
        .bind(secondary_muscles_json.as_deref())
        .bind(request.equipment.as_ref().map(|e| e.to_lowercase()))
        .bind(&request.difficulty)
        .bind(&request.instructions)
        .bind(&request.video_url)
        .bind(&request.image_url)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("An exercise with this name already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!("Created exercise: {} ({})", request.name, exercise_id);

        self.get_exercise_by_id(&exercise_id).await
    }

    /// Update an existing exercise
    pub async fn update_exercise(
        &self,
        exercise_id: &str,
        request: UpdateExerciseRequest,
    ) -> Result<Exercise, ApiError> {
        self.get_exercise_by_id(exercise_id).await?;

        let now = chrono::Utc::now().to_rfc3339();

        // Build dynamic update query
        let mut updates = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Exercise name cannot be empty".to_string(),
                ));
            }
            updates.push("name = ?");
            params.push(name.clone());
        }

        if let Some(muscle_group) = &request.muscle_group {
            if muscle_group.trim().is_empty() {
                return Err(ApiError::ValidationError(
                    "Muscle group cannot be empty".to_string(),
                ));
            }
            updates.push("muscle_group = ?");
            params.push(muscle_group.to_lowercase());
        }

        if let Some(secondary_muscles) = &request.secondary_muscles {
            updates.push("secondary_muscles = ?");
            params.push(
                serde_json::to_string(secondary_muscles).unwrap_or_else(|_| "[]".to_string()),
            );
        }

        if let Some(equipment) = &request.equipment {
            updates.push("equipment = ?");
            params.push(equipment.to_lowercase());
        }

        if let Some(difficulty) = &request.difficulty {
            if !super::validators::DIFFICULTIES.contains(&difficulty.as_str()) {
                return Err(ApiError::ValidationError(
                    "Difficulty must be 'beginner', 'intermediate' or 'advanced'".to_string(),
                ));
            }
            updates.push("difficulty = ?");
            params.push(difficulty.clone());
        }

        if let Some(instructions) = &request.instructions {
            updates.push("instructions = ?");
            params.push(instructions.clone());
        }

        if let Some(video_url) = &request.video_url {
            updates.push("video_url = ?");
            params.push(video_url.clone());
        }

        if let Some(image_url) = &request.image_url {
            updates.push("image_url = ?");
            params.push(image_url.clone());
        }

        if updates.is_empty() {
            return self.get_exercise_by_id(exercise_id).await;
        }

        updates.push("updated_at = ?");
        params.push(now.clone());
        params.push(exercise_id.to_string());

        let query = format!("UPDATE exercises SET {} WHERE id = ?", updates.join(", "));

        let mut query_builder = sqlx::query(&query);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        query_builder.execute(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::Conflict("An exercise with this name already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!("Updated exercise: {}", exercise_id);

        self.get_exercise_by_id(exercise_id).await
    }

    /// Delete an exercise
    pub async fn delete_exercise(&self, exercise_id: &str) -> Result<(), ApiError> {
        self.get_exercise_by_id(exercise_id).await?;

        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(exercise_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Exercise not found".to_string()));
        }

        info!("Deleted exercise: {}", exercise_id);

        Ok(())
    }
}
