//! Terminal rendering of a lesson plan

use colored::Colorize;

use crate::domain::LessonPlanRecord;

fn section(out: &mut Vec<String>, heading: &str, body: &str) {
    out.push(String::new());
    out.push(heading.bold().cyan().to_string());
    if body.is_empty() {
        out.push("(none)".dimmed().to_string());
    } else {
        out.push(body.to_string());
    }
}

fn list(out: &mut Vec<String>, heading: &str, items: &[String]) {
    out.push(String::new());
    out.push(heading.bold().cyan().to_string());
    if items.is_empty() {
        out.push("(none)".dimmed().to_string());
    }
    for (i, item) in items.iter().enumerate() {
        out.push(format!("  {} {}", format!("{}.", i + 1).green(), item));
    }
}

/// Render a record for display in a terminal
pub fn render_plan(record: &LessonPlanRecord) -> String {
    let mut out = vec![record.title.bold().underline().to_string()];

    section(&mut out, "Overview", &record.overview);
    list(&mut out, "Learning Objectives", &record.objectives);
    list(&mut out, "Materials Needed", &record.materials);
    out.push(String::new());
    out.push("Procedure".bold().cyan().to_string());
    section(&mut out, "  Introduction", &record.procedure.introduction);
    section(&mut out, "  Main Activity", &record.procedure.main_activity);
    section(&mut out, "  Conclusion", &record.procedure.conclusion);
    section(&mut out, "Assessment", &record.assessment);
    list(&mut out, "Extensions/Homework", &record.extensions);
    section(&mut out, "Teacher Notes", &record.notes);

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        colored::control::set_override(false);

        let record = LessonPlanRecord {
            title: "Exploring Fractions".to_string(),
            objectives: vec!["Compare".to_string(), "Order".to_string()],
            ..Default::default()
        };
        let text = render_plan(&record);

        assert!(text.starts_with("Exploring Fractions\n"));
        assert!(text.contains("Learning Objectives\n  1. Compare\n  2. Order"));
        assert!(text.contains("Overview\n(none)"));
    }
}
