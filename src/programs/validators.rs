use super::models::{CreateProgramRequest, CreateProgramWorkoutRequest};
use crate::common::{ValidationResult, Validator};

pub const PROGRAM_LEVELS: [&str; 3] = ["beginner", "intermediate", "advanced"];

fn check_level(result: &mut ValidationResult, level: &str) {
    if !PROGRAM_LEVELS.contains(&level) {
        result.add_error(
            "level",
            "Level must be 'beginner', 'intermediate' or 'advanced'",
        );
    }
}

impl Validator<CreateProgramRequest> for CreateProgramRequest {
    fn validate(&self, data: &CreateProgramRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Program name is required");
        }

        if data.name.len() > 255 {
            result.add_error("name", "Program name must not exceed 255 characters");
        }

        if let Some(level) = &data.level {
            check_level(&mut result, level);
        }

        if let Some(days) = data.days_per_week {
            if !(1..=7).contains(&days) {
                result.add_error("daysPerWeek", "Days per week must be between 1 and 7");
            }
        }

        if let Some(weeks) = data.duration_weeks {
            if !(1..=52).contains(&weeks) {
                result.add_error("durationWeeks", "Duration must be between 1 and 52 weeks");
            }
        }

        result
    }
}

impl Validator<CreateProgramWorkoutRequest> for CreateProgramWorkoutRequest {
    fn validate(&self, data: &CreateProgramWorkoutRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Workout name is required");
        }

        if data.day_index < 0 {
            result.add_error("dayIndex", "Day index must not be negative");
        }

        if let Some(entries) = &data.exercises {
            for entry in entries {
                if entry.exercise_id.trim().is_empty() {
                    result.add_error("exercises", "Each entry needs an exerciseId");
                    break;
                }
                if entry.sets < 1 {
                    result.add_error("exercises", "Each entry needs at least one set");
                    break;
                }
            }
        }

        result
    }
}
