use super::models::UpsertProfileRequest;
use crate::common::{ValidationResult, Validator};

const EXPERIENCE_LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

impl Validator<UpsertProfileRequest> for UpsertProfileRequest {
    fn validate(&self, data: &UpsertProfileRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(goal) = &data.goal {
            if goal.trim().is_empty() {
                result.add_error("goal", "Goal cannot be empty");
            }
            if goal.len() > 200 {
                result.add_error("goal", "Goal must not exceed 200 characters");
            }
        }

        if let Some(level) = &data.experience_level {
            if !EXPERIENCE_LEVELS.contains(&level.as_str()) {
                result.add_error(
                    "experienceLevel",
                    "Experience level must be 'beginner', 'intermediate' or 'advanced'",
                );
            }
        }

        if let Some(height) = data.height_cm {
            if !(50.0..=300.0).contains(&height) {
                result.add_error("heightCm", "Height must be between 50 and 300 cm");
            }
        }

        if let Some(weight) = data.weight_kg {
            if !(20.0..=500.0).contains(&weight) {
                result.add_error("weightKg", "Weight must be between 20 and 500 kg");
            }
        }

        if let Some(days) = data.training_days_per_week {
            if !(1..=7).contains(&days) {
                result.add_error(
                    "trainingDaysPerWeek",
                    "Training days per week must be between 1 and 7",
                );
            }
        }

        result
    }
}
