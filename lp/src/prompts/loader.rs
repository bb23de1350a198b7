//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::domain::GenerationParams;
use crate::extract::parse_bullets;

/// A target section as shown in the remote prompt
#[derive(Debug, Clone, Serialize)]
pub struct SectionHint {
    pub name: &'static str,
    pub hint: &'static str,
}

/// Context for rendering prompt templates
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub subject: String,
    /// Grade band value, e.g. `9-10`
    pub grade_level: String,
    /// Grade band with ages, e.g. `9-10 (Ages 14-15)`
    pub grade_label: String,
    pub duration: String,
    pub learning_objectives: String,
    /// Learning objectives split into list items
    pub objective_items: Vec<String>,
    pub additional_instructions: Option<String>,
    /// Sections requested from the model
    pub sections: Vec<SectionHint>,
}

impl PromptContext {
    pub fn from_params(params: &GenerationParams) -> Self {
        debug!(subject = %params.subject(), "PromptContext::from_params: called");
        Self {
            subject: params.subject().to_string(),
            grade_level: params.grade_level().as_str().to_string(),
            grade_label: params.grade_level().label().to_string(),
            duration: params.duration().as_str().to_string(),
            learning_objectives: params.learning_objectives().to_string(),
            objective_items: parse_bullets(Some(params.learning_objectives())),
            additional_instructions: params.additional_instructions().map(str::to_string),
            sections: embedded::TARGET_SECTIONS
                .iter()
                .map(|&(name, hint)| SectionHint { name, hint })
                .collect(),
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.lessonplan/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader that picks up overrides from `<base>/.lessonplan/prompts/`
    pub fn new(base: impl AsRef<Path>) -> Self {
        let user_dir = base.as_ref().join(".lessonplan/prompts");

        Self {
            hbs: Self::engine(),
            user_dir: if user_dir.exists() { Some(user_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        Self {
            hbs: Self::engine(),
            user_dir: None,
        }
    }

    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.lessonplan/prompts/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading prompt from user override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!("Using embedded prompt: {}", name);
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        let template = self.load_template(template_name)?;
        debug!(%template_name, "render: called");

        self.hbs
            .render_template(&template, context)
            .map(|rendered| rendered.trim().to_string())
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Render the built-in version of a template, ignoring user overrides
    pub fn render_embedded(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        debug!(%template_name, "render_embedded: called");
        let template =
            embedded::get_embedded(template_name).ok_or_else(|| eyre!("Prompt template not found: {}", template_name))?;

        self.hbs
            .render_template(template, context)
            .map(|rendered| rendered.trim().to_string())
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// System message for the remote completion
    pub fn system_prompt(&self) -> &'static str {
        embedded::LESSON_PLAN_SYSTEM
    }
}
