//! Lesson plan generator
//!
//! Collects lesson parameters, asks a language model for a lesson plan and
//! carves the unstructured answer into a fixed record of titled sections and
//! bullet lists. Without a configured model, plans are synthesized from
//! templates instead.
//!
//! # Modules
//!
//! - [`domain`] - Validated parameters and the lesson plan record
//! - [`extract`] - Section, nested section and bullet extraction, plus assembly
//! - [`generator`] - Remote and template generation modes
//! - [`llm`] - LLM client trait and OpenAI implementation
//! - [`prompts`] - Prompt and prose templates
//! - [`export`] - Plain-text document export
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod extract;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod render;

// Re-export commonly used types
pub use config::{Config, GeneratorConfig, LlmConfig, ModeSetting};
pub use domain::{GenerationParams, GradeLevel, LessonDuration, LessonPlanRecord, Procedure, ValidationError};
pub use export::{export_file_name, to_document, write_export};
pub use extract::{assemble, extract_nested, extract_section, parse_bullets};
pub use generator::{GenerateError, GenerationMode, Generator};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient, create_client};
pub use prompts::{PromptContext, PromptLoader};
