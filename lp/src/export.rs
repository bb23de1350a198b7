//! Plain-text export of a lesson plan

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, info};

use crate::domain::LessonPlanRecord;

/// File extension of exported documents
pub const EXPORT_EXTENSION: &str = "txt";

/// Serialize a record to a markdown-style text document
///
/// Heading order is fixed and matches the record's field order.
pub fn to_document(record: &LessonPlanRecord) -> String {
    debug!(title = %record.title, "to_document: called");
    let mut doc = format!("# {}\n", record.title);

    push_section(&mut doc, "## Overview", &record.overview);
    push_section(&mut doc, "## Learning Objectives", &bullets(&record.objectives));
    push_section(&mut doc, "## Materials Needed", &bullets(&record.materials));
    doc.push_str("\n## Procedure\n");
    push_section(&mut doc, "### Introduction", &record.procedure.introduction);
    push_section(&mut doc, "### Main Activity", &record.procedure.main_activity);
    push_section(&mut doc, "### Conclusion", &record.procedure.conclusion);
    push_section(&mut doc, "## Assessment", &record.assessment);
    push_section(&mut doc, "## Extensions/Homework", &bullets(&record.extensions));
    push_section(&mut doc, "## Teacher Notes", &record.notes);

    doc
}

fn push_section(doc: &mut String, heading: &str, body: &str) {
    doc.push('\n');
    doc.push_str(heading);
    doc.push('\n');
    doc.push_str(body);
    doc.push('\n');
}

fn bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("- {}", item)).collect::<Vec<_>>().join("\n")
}

/// File name for an exported plan
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, the result is lower-cased
/// and the text extension is appended.
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}.{}", stem, EXPORT_EXTENSION)
}

/// Write the document for `record` into `dir`, returning the file path
pub fn write_export(dir: &Path, record: &LessonPlanRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir).context(format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(export_file_name(&record.title));
    fs::write(&path, to_document(record)).context(format!("Failed to write {}", path.display()))?;

    info!("Exported lesson plan to {}", path.display());
    Ok(path)
}
