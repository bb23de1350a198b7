//! Assemble a lesson plan record from generated text

use tracing::debug;

use super::{extract_nested, extract_section, parse_bullets};
use crate::domain::{GenerationParams, LessonPlanRecord, Procedure};

/// One heading lookup in an alias chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// A heading anywhere in the document
    Section(&'static str),
    /// A heading inside a parent section only
    Nested { parent: &'static str, child: &'static str },
}

impl Candidate {
    pub fn lookup(&self, text: &str) -> Option<String> {
        match self {
            Self::Section(name) => extract_section(text, name),
            Self::Nested { parent, child } => extract_nested(text, parent, child),
        }
    }
}

const fn procedure(child: &'static str) -> Candidate {
    Candidate::Nested {
        parent: "Procedure",
        child,
    }
}

/// Heading alias chains, tried in order for each record field
pub mod aliases {
    use super::{Candidate, Candidate::Section, procedure};

    pub const TITLE: &[Candidate] = &[Section("Title")];
    pub const OVERVIEW: &[Candidate] = &[Section("Overview")];
    pub const OBJECTIVES: &[Candidate] = &[Section("Learning Objectives"), Section("Objectives")];
    pub const MATERIALS: &[Candidate] = &[Section("Materials"), Section("Materials Needed")];
    pub const INTRODUCTION: &[Candidate] = &[Section("Introduction"), procedure("Introduction")];
    pub const MAIN_ACTIVITY: &[Candidate] = &[
        Section("Main Activity"),
        procedure("Main Activity"),
        procedure("Development"),
    ];
    pub const CONCLUSION: &[Candidate] = &[Section("Conclusion"), procedure("Conclusion"), procedure("Closure")];
    pub const ASSESSMENT: &[Candidate] = &[Section("Assessment"), Section("Assessment Methods")];
    pub const EXTENSIONS: &[Candidate] = &[
        Section("Extensions"),
        Section("Extensions/Homework"),
        Section("Homework"),
    ];
    pub const NOTES: &[Candidate] = &[Section("Teacher Notes"), Section("Notes")];
}

/// Resolve an alias chain lazily, stopping at the first non-empty span
///
/// A heading that is present but has no content counts as missing, so the next
/// alias still gets a chance.
pub fn first_present(text: &str, chain: &[Candidate]) -> Option<String> {
    chain
        .iter()
        .find_map(|candidate| candidate.lookup(text).filter(|span| !span.is_empty()))
}

fn text_field(text: &str, chain: &[Candidate]) -> String {
    first_present(text, chain).unwrap_or_default()
}

fn list_field(text: &str, chain: &[Candidate]) -> Vec<String> {
    parse_bullets(first_present(text, chain).as_deref())
}

/// Build a complete record from raw completion text
///
/// Total: every field falls back to an empty value, except the title which
/// falls back to `"<subject> Lesson Plan"`.
pub fn assemble(raw_text: &str, params: &GenerationParams) -> LessonPlanRecord {
    debug!(text_len = raw_text.len(), subject = %params.subject(), "assemble: called");

    let record = LessonPlanRecord {
        title: first_present(raw_text, aliases::TITLE).unwrap_or_else(|| format!("{} Lesson Plan", params.subject())),
        overview: text_field(raw_text, aliases::OVERVIEW),
        objectives: list_field(raw_text, aliases::OBJECTIVES),
        materials: list_field(raw_text, aliases::MATERIALS),
        procedure: Procedure {
            introduction: text_field(raw_text, aliases::INTRODUCTION),
            main_activity: text_field(raw_text, aliases::MAIN_ACTIVITY),
            conclusion: text_field(raw_text, aliases::CONCLUSION),
        },
        assessment: text_field(raw_text, aliases::ASSESSMENT),
        extensions: list_field(raw_text, aliases::EXTENSIONS),
        notes: text_field(raw_text, aliases::NOTES),
    };

    debug!(
        title = %record.title,
        objectives = record.objectives.len(),
        materials = record.materials.len(),
        extensions = record.extensions.len(),
        "assemble: done"
    );
    record
}
