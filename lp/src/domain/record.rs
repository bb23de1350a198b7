//! Structured lesson plan record

use serde::{Deserialize, Serialize};

/// Procedure steps of a lesson
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procedure {
    pub introduction: String,
    pub main_activity: String,
    pub conclusion: String,
}

/// A fully-populated lesson plan
///
/// Every field is always present; an empty string or empty list means the
/// generated text did not contain a usable section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanRecord {
    pub title: String,
    pub overview: String,
    pub objectives: Vec<String>,
    pub materials: Vec<String>,
    pub procedure: Procedure,
    pub assessment: String,
    pub extensions: Vec<String>,
    pub notes: String,
}
