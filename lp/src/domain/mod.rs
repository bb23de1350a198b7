//! Domain types: generation inputs and the structured lesson plan

mod params;
mod record;

pub use params::{GenerationParams, GradeLevel, LessonDuration, MIN_OBJECTIVES_LEN, MIN_SUBJECT_LEN, ValidationError};
pub use record::{LessonPlanRecord, Procedure};
