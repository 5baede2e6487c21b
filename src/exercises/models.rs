use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(rename = "muscleGroup")]
    pub muscle_group: String,
    #[serde(
        rename = "secondaryMuscles",
        serialize_with = "crate::common::helpers::serialize_string_list",
        deserialize_with = "crate::common::helpers::deserialize_string_list"
    )]
    pub secondary_muscles: Option<String>,
    pub equipment: Option<String>, // e.g. "barbell", "dumbbells", "bodyweight"
    pub difficulty: Option<String>,
    pub instructions: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// GET /api/exercises query filters; all optional and combinable
#[derive(Debug, Deserialize)]
pub struct ListExercisesQuery {
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub name: String,
    pub muscle_group: String,
    pub secondary_muscles: Option<Vec<String>>,
    pub equipment: Option<String>,
    pub difficulty: Option<String>,
    pub instructions: Option<String>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseRequest {
    pub name: Option<String>,
    pub muscle_group: Option<String>,
    pub secondary_muscles: Option<Vec<String>>,
    pub equipment: Option<String>,
    pub difficulty: Option<String>,
    pub instructions: Option<String>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
