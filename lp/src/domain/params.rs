//! Validated generation parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Minimum subject length (after trimming)
pub const MIN_SUBJECT_LEN: usize = 2;

/// Minimum learning objectives length (after trimming)
pub const MIN_OBJECTIVES_LEN: usize = 10;

/// Input parameters rejected before generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Subject must be at least {MIN_SUBJECT_LEN} characters.")]
    SubjectTooShort,

    #[error("Learning objectives must be at least {MIN_OBJECTIVES_LEN} characters.")]
    ObjectivesTooShort,

    #[error("Unknown grade level: '{0}'. Use one of: {list}", list = GradeLevel::value_list())]
    UnknownGradeLevel(String),

    #[error("Unknown duration: '{0}'. Use one of: {list}", list = LessonDuration::value_list())]
    UnknownDuration(String),
}

/// Grade band the lesson targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "K-2")]
    K2,
    #[serde(rename = "3-5")]
    Grades3To5,
    #[serde(rename = "6-8")]
    Grades6To8,
    #[serde(rename = "9-10")]
    Grades9To10,
    #[serde(rename = "11-12")]
    Grades11To12,
    #[serde(rename = "college")]
    College,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 6] = [
        Self::K2,
        Self::Grades3To5,
        Self::Grades6To8,
        Self::Grades9To10,
        Self::Grades11To12,
        Self::College,
    ];

    /// Value used in prompts and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::K2 => "K-2",
            Self::Grades3To5 => "3-5",
            Self::Grades6To8 => "6-8",
            Self::Grades9To10 => "9-10",
            Self::Grades11To12 => "11-12",
            Self::College => "college",
        }
    }

    /// Human-readable label including the age range
    pub fn label(&self) -> &'static str {
        match self {
            Self::K2 => "K-2 (Ages 5-7)",
            Self::Grades3To5 => "3-5 (Ages 8-10)",
            Self::Grades6To8 => "6-8 (Ages 11-13)",
            Self::Grades9To10 => "9-10 (Ages 14-15)",
            Self::Grades11To12 => "11-12 (Ages 16-18)",
            Self::College => "College",
        }
    }

    fn value_list() -> String {
        Self::ALL.iter().map(|g| g.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GradeLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownGradeLevel(s.to_string()))
    }
}

/// Time span the lesson is designed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonDuration {
    #[serde(rename = "30 minutes")]
    Minutes30,
    #[serde(rename = "45 minutes")]
    Minutes45,
    #[serde(rename = "60 minutes")]
    Minutes60,
    #[serde(rename = "90 minutes")]
    Minutes90,
    #[serde(rename = "2 hours")]
    Hours2,
    #[serde(rename = "multiple days")]
    MultipleDays,
}

impl LessonDuration {
    pub const ALL: [LessonDuration; 6] = [
        Self::Minutes30,
        Self::Minutes45,
        Self::Minutes60,
        Self::Minutes90,
        Self::Hours2,
        Self::MultipleDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes30 => "30 minutes",
            Self::Minutes45 => "45 minutes",
            Self::Minutes60 => "60 minutes",
            Self::Minutes90 => "90 minutes",
            Self::Hours2 => "2 hours",
            Self::MultipleDays => "multiple days",
        }
    }

    fn value_list() -> String {
        Self::ALL.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for LessonDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LessonDuration {
    type Err = ValidationError;

    /// Accepts the canonical value, ignoring case and allowing `-`/`_` for spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ValidationError::UnknownDuration(s.to_string()))
    }
}

/// Parameters for a single lesson plan generation
///
/// Only constructible through [`GenerationParams::new`], so anything holding one
/// has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    subject: String,
    grade_level: GradeLevel,
    duration: LessonDuration,
    learning_objectives: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_instructions: Option<String>,
}

impl GenerationParams {
    /// Validate raw inputs and build the parameter set
    pub fn new(
        subject: impl Into<String>,
        grade_level: GradeLevel,
        duration: LessonDuration,
        learning_objectives: impl Into<String>,
        additional_instructions: Option<String>,
    ) -> Result<Self, ValidationError> {
        let subject = subject.into().trim().to_string();
        let learning_objectives = learning_objectives.into().trim().to_string();
        debug!(%subject, %grade_level, %duration, "GenerationParams::new: called");

        if subject.chars().count() < MIN_SUBJECT_LEN {
            return Err(ValidationError::SubjectTooShort);
        }
        if learning_objectives.chars().count() < MIN_OBJECTIVES_LEN {
            return Err(ValidationError::ObjectivesTooShort);
        }

        let additional_instructions = additional_instructions
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            subject,
            grade_level,
            duration,
            learning_objectives,
            additional_instructions,
        })
    }

    /// Validate from string values as typed by a user
    pub fn parse(
        subject: &str,
        grade_level: &str,
        duration: &str,
        learning_objectives: &str,
        additional_instructions: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            subject,
            grade_level.parse()?,
            duration.parse()?,
            learning_objectives,
            additional_instructions.map(str::to_string),
        )
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn grade_level(&self) -> GradeLevel {
        self.grade_level
    }

    pub fn duration(&self) -> LessonDuration {
        self.duration
    }

    pub fn learning_objectives(&self) -> &str {
        &self.learning_objectives
    }

    pub fn additional_instructions(&self) -> Option<&str> {
        self.additional_instructions.as_deref()
    }
}
