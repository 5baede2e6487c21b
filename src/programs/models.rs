use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub level: Option<String>, // "beginner", "intermediate" or "advanced"
    #[serde(rename = "daysPerWeek")]
    pub days_per_week: Option<i64>,
    #[serde(rename = "durationWeeks")]
    pub duration_weeks: Option<i64>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// One training day of a program.
///
/// `exercises` is a JSON array string:
/// `[{"exerciseId": "E_...", "sets": 3, "reps": "8-12", "restSecs": 90}, ...]`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgramWorkout {
    pub id: String,
    #[serde(rename = "programId")]
    pub program_id: String,
    #[serde(rename = "dayIndex")]
    pub day_index: i64,
    pub name: String,
    pub focus: Option<String>,
    #[serde(
        rename = "exercises",
        serialize_with = "crate::common::helpers::serialize_json_list"
    )]
    pub exercises: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// A program together with its workout days, ordered by day index
#[derive(Debug, Serialize)]
pub struct ProgramDetail {
    #[serde(flatten)]
    pub program: Program,
    pub workouts: Vec<ProgramWorkout>,
}

/// An exercise entry inside a workout day
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseEntry {
    pub exercise_id: String,
    pub sets: i64,
    pub reps: String, // e.g. "10" or "8-12"
    pub rest_secs: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub name: String,
    pub description: Option<String>,
    pub level: Option<String>,
    pub days_per_week: Option<i64>,
    pub duration_weeks: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub days_per_week: Option<i64>,
    pub duration_weeks: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramWorkoutRequest {
    pub day_index: i64,
    pub name: String,
    pub focus: Option<String>,
    pub exercises: Option<Vec<WorkoutExerciseEntry>>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
