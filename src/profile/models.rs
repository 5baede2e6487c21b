// src/profile/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Fitness Profile Models
// ============================================================================

/// Per-user fitness profile captured during onboarding.
///
/// `equipment` is stored as a JSON array string and serialized back to an
/// array in responses.
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub goal: Option<String>,
    #[serde(rename = "experienceLevel")]
    pub experience_level: Option<String>,
    #[serde(rename = "heightCm")]
    pub height_cm: Option<f64>,
    #[serde(rename = "weightKg")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "trainingDaysPerWeek")]
    pub training_days_per_week: Option<i64>,
    #[serde(
        rename = "equipment",
        serialize_with = "crate::common::helpers::serialize_string_list",
        deserialize_with = "crate::common::helpers::deserialize_string_list"
    )]
    pub equipment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// PUT /api/profile body; every field optional so the client can save
/// onboarding answers incrementally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    pub goal: Option<String>,
    pub experience_level: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub training_days_per_week: Option<i64>,
    pub equipment: Option<Vec<String>>,
}
