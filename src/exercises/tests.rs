//! Tests for exercises module
//!
//! These tests verify exercise models, request validation, and catalog
//! filtering against in-memory SQLite.

#[cfg(test)]
mod tests {
    use super::super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use crate::common::{migrations, ApiError, Validator};
    use models::{CreateExerciseRequest, ListExercisesQuery, UpdateExerciseRequest};
    use services::ExercisesService;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn exercise_request(name: &str, muscle_group: &str, equipment: &str) -> CreateExerciseRequest {
        CreateExerciseRequest {
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            secondary_muscles: None,
            equipment: Some(equipment.to_string()),
            difficulty: Some("beginner".to_string()),
            instructions: None,
            video_url: None,
            image_url: None,
        }
    }

    fn no_filter() -> ListExercisesQuery {
        ListExercisesQuery {
            muscle_group: None,
            equipment: None,
            q: None,
        }
    }

    #[test]
    fn test_create_exercise_validation() {
        let request = exercise_request("Bench Press", "chest", "barbell");
        assert!(request.validate(&request).is_valid);

        let request = exercise_request("", "", "barbell");
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "name"));
        assert!(result.errors.iter().any(|e| e.field == "muscleGroup"));

        let mut request = exercise_request("Bench Press", "chest", "barbell");
        request.difficulty = Some("impossible".to_string());
        request.video_url = Some("ftp://example.com/video".to_string());
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "difficulty"));
        assert!(result.errors.iter().any(|e| e.field == "videoUrl"));
    }

    #[tokio::test]
    async fn test_exercise_filters() {
        let service = ExercisesService::new(test_pool().await);

        for (name, muscle_group, equipment) in [
            ("Bench Press", "chest", "barbell"),
            ("Push Up", "chest", "bodyweight"),
            ("Squat", "legs", "barbell"),
        ] {
            service
                .create_exercise(exercise_request(name, muscle_group, equipment))
                .await
                .expect("Create should succeed");
        }

        let all = service
            .list_exercises(&no_filter())
            .await
            .expect("List should succeed");
        assert_eq!(all.len(), 3);

        let chest = service
            .list_exercises(&ListExercisesQuery {
                muscle_group: Some("chest".to_string()),
                ..no_filter()
            })
            .await
            .expect("List should succeed");
        assert_eq!(chest.len(), 2);

        let chest_barbell = service
            .list_exercises(&ListExercisesQuery {
                muscle_group: Some("chest".to_string()),
                equipment: Some("barbell".to_string()),
                q: None,
            })
            .await
            .expect("List should succeed");
        assert_eq!(chest_barbell.len(), 1);
        assert_eq!(chest_barbell[0].name, "Bench Press");

        let search = service
            .list_exercises(&ListExercisesQuery {
                q: Some("push".to_string()),
                ..no_filter()
            })
            .await
            .expect("List should succeed");
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].name, "Push Up");
    }

    #[tokio::test]
    async fn test_exercise_crud_round_trip() {
        let service = ExercisesService::new(test_pool().await);

        let created = service
            .create_exercise(exercise_request("Bench Press", "Chest", "Barbell"))
            .await
            .expect("Create should succeed");
        assert!(created.id.starts_with("E_"));
        // Muscle group and equipment are normalized to lowercase
        assert_eq!(created.muscle_group, "chest");
        assert_eq!(created.equipment.as_deref(), Some("barbell"));

        let updated = service
            .update_exercise(
                &created.id,
                UpdateExerciseRequest {
                    name: None,
                    muscle_group: None,
                    secondary_muscles: Some(vec!["triceps".to_string()]),
                    equipment: None,
                    difficulty: Some("intermediate".to_string()),
                    instructions: Some("Keep your feet planted".to_string()),
                    video_url: None,
                    image_url: None,
                },
            )
            .await
            .expect("Update should succeed");
        assert_eq!(updated.difficulty.as_deref(), Some("intermediate"));

        let value = serde_json::to_value(&updated).expect("Exercise should serialize");
        assert_eq!(value["secondaryMuscles"][0], "triceps");

        service
            .delete_exercise(&created.id)
            .await
            .expect("Delete should succeed");

        let err = service
            .get_exercise_by_id(&created.id)
            .await
            .expect_err("Deleted exercise should be gone");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_exercise_name_conflicts() {
        let service = ExercisesService::new(test_pool().await);

        service
            .create_exercise(exercise_request("Bench Press", "chest", "barbell"))
            .await
            .expect("First create should succeed");

        let err = service
            .create_exercise(exercise_request("Bench Press", "chest", "dumbbells"))
            .await
            .expect_err("Duplicate name should be rejected");
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}
