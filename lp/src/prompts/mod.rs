//! Prompt Template System
//!
//! Loads and renders `.pmt` (prompt template) files for the remote prompt and
//! the template-mode prose.
//!
//! Template loading chain:
//! 1. `.lessonplan/prompts/{name}.pmt` (user override)
//! 2. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{PromptContext, PromptLoader, SectionHint};
