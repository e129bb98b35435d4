// src/models/answer.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::error::AppError;

/// The four correct component ids of the featured sound test for one day.
/// Fetched by `featured_on` date; immutable for the scope of one grading call.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerKey {
    pub keyboard_id: String,
    pub plate_material_id: String,
    pub keycap_material_id: String,
    pub keyswitch_id: String,
}

impl AnswerKey {
    /// The four component columns, in the fixed order grading iterates them.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("keyboard_id", &self.keyboard_id),
            ("plate_material_id", &self.plate_material_id),
            ("keycap_material_id", &self.keycap_material_id),
            ("keyswitch_id", &self.keyswitch_id),
        ]
    }
}

/// A user's guess at the four components of today's featured sound test.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessSubmission {
    pub keyboard: String,
    pub plate_material: String,
    pub keycap_material: String,
    pub keyswitch: String,
}

impl GuessSubmission {
    /// Builds a submission from a raw JSON body, checking each field is a
    /// string so the 400 message names the offending field.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        Ok(Self {
            keycap_material: require_string(body, "keycapMaterial")?,
            plate_material: require_string(body, "plateMaterial")?,
            keyboard: require_string(body, "keyboard")?,
            keyswitch: require_string(body, "keyswitch")?,
        })
    }
}

fn require_string(body: &Value, field: &str) -> Result<String, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| AppError::BadRequest(format!("expected {} to be a string", field)))
}

/// The graded outcome for a single component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckedAnswer {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// The full grade for one submission: one `CheckedAnswer` per component plus
/// the aggregate points. `Default` is the all-absent zero report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub keyboard_id: Option<CheckedAnswer>,
    pub plate_material_id: Option<CheckedAnswer>,
    pub keycap_material_id: Option<CheckedAnswer>,
    pub keyswitch_id: Option<CheckedAnswer>,
    #[serde(rename = "totalPoints")]
    pub total_points: i64,
}
