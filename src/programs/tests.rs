//! Tests for programs module
//!
//! These tests verify program and workout models, request validation, and the
//! catalog service against in-memory SQLite.

#[cfg(test)]
mod tests {
    use super::super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use crate::common::{migrations, ApiError, Validator};
    use models::{CreateProgramRequest, CreateProgramWorkoutRequest, UpdateProgramRequest, WorkoutExerciseEntry};
    use services::ProgramsService;

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

    fn program_request(name: &str) -> CreateProgramRequest {
        CreateProgramRequest {
            name: name.to_string(),
            description: Some("Three day full body split".to_string()),
            level: Some("beginner".to_string()),
            days_per_week: Some(3),
            duration_weeks: Some(8),
            image_url: None,
        }
    }

    #[test]
    fn test_create_program_validation() {
        let request = program_request("Full Body Foundations");
        assert!(request.validate(&request).is_valid);

        let mut request = program_request("");
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "name"));

        request = program_request("Overtraining Special");
        request.days_per_week = Some(9);
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "daysPerWeek"));

        request = program_request("Mystery Program");
        request.level = Some("elite".to_string());
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "level"));
    }

    #[test]
    fn test_create_workout_validation() {
        let request = CreateProgramWorkoutRequest {
            day_index: 0,
            name: "Push Day".to_string(),
            focus: Some("chest".to_string()),
            exercises: Some(vec![WorkoutExerciseEntry {
                exercise_id: "E_TEST01".to_string(),
                sets: 3,
                reps: "8-12".to_string(),
                rest_secs: Some(90),
            }]),
        };
        assert!(request.validate(&request).is_valid);

        let request = CreateProgramWorkoutRequest {
            day_index: -1,
            name: "".to_string(),
            focus: None,
            exercises: Some(vec![WorkoutExerciseEntry {
                exercise_id: "".to_string(),
                sets: 0,
                reps: "10".to_string(),
                rest_secs: None,
            }]),
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "name"));
        assert!(result.errors.iter().any(|e| e.field == "dayIndex"));
        assert!(result.errors.iter().any(|e| e.field == "exercises"));
    }

    #[tokio::test]
    async fn test_program_crud_round_trip() {
        let service = ProgramsService::new(test_pool().await);

        let created = service
            .create_program(program_request("Full Body Foundations"))
            .await
            .expect("Create should succeed");
        assert!(created.id.starts_with("P_"));
        assert_eq!(created.name, "Full Body Foundations");

        let listed = service.get_all_programs().await.expect("List should succeed");
        assert_eq!(listed.len(), 1);

        let updated = service
            .update_program(
                &created.id,
                UpdateProgramRequest {
                    name: None,
                    description: Some("Updated description".to_string()),
                    level: Some("intermediate".to_string()),
                    days_per_week: None,
                    duration_weeks: None,
                    image_url: None,
                },
            )
            .await
            .expect("Update should succeed");
        assert_eq!(updated.level.as_deref(), Some("intermediate"));
        assert_eq!(updated.description.as_deref(), Some("Updated description"));

        service
            .delete_program(&created.id)
            .await
            .expect("Delete should succeed");

        let err = service
            .get_program_by_id(&created.id)
            .await
            .expect_err("Deleted program should be gone");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_program_name_conflicts() {
        let service = ProgramsService::new(test_pool().await);

        service
            .create_program(program_request("Full Body Foundations"))
            .await
            .expect("First create should succeed");

        let err = service
            .create_program(program_request("Full Body Foundations"))
            .await
            .expect_err("Duplicate name should be rejected");
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_workouts_are_listed_in_day_order() {
        let service = ProgramsService::new(test_pool().await);

        let program = service
            .create_program(program_request("Push Pull Legs"))
            .await
            .expect("Create should succeed");

        for (day_index, name) in [(2, "Leg Day"), (0, "Push Day"), (1, "Pull Day")] {
            service
                .create_workout(
                    &program.id,
                    CreateProgramWorkoutRequest {
                        day_index,
                        name: name.to_string(),
                        focus: None,
                        exercises: None,
                    },
                )
                .await
                .expect("Workout create should succeed");
        }

        let detail = service
            .get_program_detail(&program.id)
            .await
            .expect("Detail should load");
        let names: Vec<&str> = detail.workouts.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Push Day", "Pull Day", "Leg Day"]);
    }

    #[tokio::test]
    async fn test_delete_workout_checks_program_ownership() {
        let service = ProgramsService::new(test_pool().await);

        let program_a = service
            .create_program(program_request("Program A"))
            .await
            .expect("Create should succeed");
        let program_b = service
            .create_program(program_request("Program B"))
            .await
            .expect("Create should succeed");

        let workout = service
            .create_workout(
                &program_a.id,
                CreateProgramWorkoutRequest {
                    day_index: 0,
                    name: "Push Day".to_string(),
                    focus: None,
                    exercises: None,
                },
            )
            .await
            .expect("Workout create should succeed");

        let err = service
            .delete_workout(&program_b.id, &workout.id)
            .await
            .expect_err("Cross-program delete should be rejected");
        assert!(matches!(err, ApiError::NotFound(_)));

        service
            .delete_workout(&program_a.id, &workout.id)
            .await
            .expect("Owner delete should succeed");
    }

    #[test]
    fn test_workout_serializes_exercises_as_array() {
        let workout = models::ProgramWorkout {
            id: "W_TEST01".to_string(),
            program_id: "P_TEST01".to_string(),
            day_index: 0,
            name: "Push Day".to_string(),
            focus: Some("chest".to_string()),
            exercises: Some(
                r#"[{"exerciseId":"E_TEST01","sets":3,"reps":"8-12","restSecs":90}]"#.to_string(),
            ),
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&workout).expect("Workout should serialize");
        assert_eq!(value["exercises"][0]["exerciseId"], "E_TEST01");
        assert_eq!(value["exercises"][0]["sets"], 3);
    }
}
