use super::models::CreateExerciseRequest;
use crate::common::{ValidationResult, Validator};

pub const DIFFICULTIES: [&str; 3] = ["beginner", "intermediate", "advanced"];

impl Validator<CreateExerciseRequest> for CreateExerciseRequest {
    fn validate(&self, data: &CreateExerciseRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Exercise name is required");
        }

        if data.name.len() > 255 {
            result.add_error("name", "Exercise name must not exceed 255 characters");
        }

        if data.muscle_group.trim().is_empty() {
            result.add_error("muscleGroup", "Muscle group is required");
        }

        if let Some(difficulty) = &data.difficulty {
            if !DIFFICULTIES.contains(&difficulty.as_str()) {
                result.add_error(
                    "difficulty",
                    "Difficulty must be 'beginner', 'intermediate' or 'advanced'",
                );
            }
        }

        if let Some(video_url) = &data.video_url {
            if !video_url.is_empty()
                && !video_url.starts_with("http://")
                && !video_url.starts_with("https://")
            {
                result.add_error(
                    "videoUrl",
                    "Video URL must start with http:// or https://",
                );
            }
        }

        result
    }
}
