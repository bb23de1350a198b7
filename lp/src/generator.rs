//! Generation request handling
//!
//! Turns validated parameters into a lesson plan, either by asking a remote
//! completion service and running the extraction pipeline on its answer, or by
//! filling fixed prose templates without any network access.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, ModeSetting};
use crate::domain::{GenerationParams, LessonPlanRecord, Procedure};
use crate::extract::{assemble, parse_bullets};
use crate::llm::{CompletionRequest, LlmClient, LlmError, Message, create_client};
use crate::prompts::{PromptContext, PromptLoader};

/// Errors from a single generation attempt
///
/// No record is produced when any of these occur.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Remote service error: {}", .0.upstream_message())]
    RemoteService(#[from] LlmError),

    #[error("Prompt rendering failed: {0}")]
    Prompt(String),
}

/// Backend selected once at configuration time
pub enum GenerationMode {
    /// Ask a completion service, then extract the record from its text
    Remote {
        client: Arc<dyn LlmClient>,
        model: String,
        temperature: f64,
        max_tokens: u32,
    },
    /// Fill prose templates after a fixed delay
    Template { delay: Duration },
}

impl GenerationMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Remote { .. } => "remote",
            Self::Template { .. } => "template",
        }
    }
}

impl std::fmt::Debug for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote {
                model,
                temperature,
                max_tokens,
                ..
            } => f
                .debug_struct("Remote")
                .field("model", model)
                .field("temperature", temperature)
                .field("max_tokens", max_tokens)
                .finish_non_exhaustive(),
            Self::Template { delay } => f.debug_struct("Template").field("delay", delay).finish(),
        }
    }
}

/// Produces one lesson plan per call
pub struct Generator {
    mode: GenerationMode,
    prompts: PromptLoader,
}

impl Generator {
    pub fn new(mode: GenerationMode, prompts: PromptLoader) -> Self {
        debug!(mode = mode.name(), "Generator::new: called");
        Self { mode, prompts }
    }

    /// Build a generator from configuration
    ///
    /// `override_mode` (e.g. from the command line) replaces the configured mode.
    /// Remote mode needs the API key to be present.
    pub fn from_config(
        config: &Config,
        override_mode: Option<ModeSetting>,
        prompts: PromptLoader,
    ) -> Result<Self, LlmError> {
        let mut generator_config = config.generator.clone();
        if let Some(mode) = override_mode {
            generator_config.mode = mode;
        }

        let mode = match generator_config.resolve_mode(&config.llm) {
            ModeSetting::Remote => GenerationMode::Remote {
                client: create_client(&config.llm)?,
                model: config.llm.model.clone(),
                temperature: config.llm.temperature,
                max_tokens: config.llm.max_tokens,
            },
            _ => GenerationMode::Template {
                delay: Duration::from_millis(generator_config.template_delay_ms),
            },
        };

        Ok(Self::new(mode, prompts))
    }

    pub fn mode(&self) -> &GenerationMode {
        &self.mode
    }

    /// Generate a lesson plan for `params`
    ///
    /// Single attempt; a remote failure is returned unchanged.
    pub async fn generate(&self, params: &GenerationParams) -> Result<LessonPlanRecord, GenerateError> {
        info!(
            mode = self.mode.name(),
            subject = %params.subject(),
            grade_level = %params.grade_level(),
            duration = %params.duration(),
            has_instructions = params.additional_instructions().is_some(),
            "Generating lesson plan"
        );

        let context = PromptContext::from_params(params);

        match &self.mode {
            GenerationMode::Remote {
                client,
                temperature,
                max_tokens,
                ..
            } => {
                let prompt = self.render(&context, "lesson-plan")?;
                let request = CompletionRequest {
                    system_prompt: self.prompts.system_prompt().to_string(),
                    messages: vec![Message::user(prompt)],
                    temperature: *temperature,
                    max_tokens: *max_tokens,
                };

                let response = client.complete(request).await.inspect_err(|e| {
                    warn!(status = ?e.status(), error = %e, "generate: completion failed");
                })?;
                debug!(
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    total_tokens = response.usage.total(),
                    "generate: completion received"
                );
                let raw_text = response
                    .content
                    .ok_or_else(|| LlmError::InvalidResponse("Completion contained no message content".to_string()))?;

                Ok(assemble(&raw_text, params))
            }
            GenerationMode::Template { delay } => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                self.synthesize(&context)
            }
        }
    }

    /// Build a record from prose templates alone
    ///
    /// Every field is non-empty: a user override that renders blank is replaced
    /// by the built-in template for that piece.
    fn synthesize(&self, context: &PromptContext) -> Result<LessonPlanRecord, GenerateError> {
        debug!(subject = %context.subject, "synthesize: called");

        Ok(LessonPlanRecord {
            title: self.piece(context, "template-title")?,
            overview: self.piece(context, "template-overview")?,
            objectives: self.list_piece(context, "template-objectives")?,
            materials: self.list_piece(context, "template-materials")?,
            procedure: Procedure {
                introduction: self.piece(context, "template-introduction")?,
                main_activity: self.piece(context, "template-main-activity")?,
                conclusion: self.piece(context, "template-conclusion")?,
            },
            assessment: self.piece(context, "template-assessment")?,
            extensions: self.list_piece(context, "template-extensions")?,
            notes: self.piece(context, "template-notes")?,
        })
    }

    fn piece(&self, context: &PromptContext, name: &str) -> Result<String, GenerateError> {
        let text = self.render(context, name)?;
        if !text.is_empty() {
            return Ok(text);
        }
        warn!(%name, "synthesize: template rendered blank, using built-in");
        self.render_embedded(context, name)
    }

    fn list_piece(&self, context: &PromptContext, name: &str) -> Result<Vec<String>, GenerateError> {
        let items = parse_bullets(Some(&self.render(context, name)?));
        if !items.is_empty() {
            return Ok(items);
        }
        warn!(%name, "synthesize: template rendered no items, using built-in");
        Ok(parse_bullets(Some(&self.render_embedded(context, name)?)))
    }

    fn render(&self, context: &PromptContext, name: &str) -> Result<String, GenerateError> {
        self.prompts
            .render(name, context)
            .map_err(|e| GenerateError::Prompt(e.to_string()))
    }

    fn render_embedded(&self, context: &PromptContext, name: &str) -> Result<String, GenerateError> {
        self.prompts
            .render_embedded(name, context)
            .map_err(|e| GenerateError::Prompt(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{CompletionResponse, MockLlmClient};

    fn params() -> GenerationParams {
        GenerationParams::parse("Algebra", "9-10", "45 minutes", "solve linear equations", None).unwrap()
    }

    fn remote(client: Arc<MockLlmClient>) -> Generator {
        Generator::new(
            GenerationMode::Remote {
                client,
                model: "gpt-4o".to_string(),
                temperature: 0.7,
                max_tokens: 4096,
            },
            PromptLoader::embedded_only(),
        )
    }

    fn template() -> Generator {
        Generator::new(
            GenerationMode::Template { delay: Duration::ZERO },
            PromptLoader::embedded_only(),
        )
    }

    #[tokio::test]
    async fn test_template_mode_populates_every_field() {
        let record = template().generate(&params()).await.unwrap();

        assert!(record.title.contains("Algebra"));
        assert!(record.overview.contains("45 minutes"));
        assert!(record.overview.contains("9-10"));
        assert!(!record.objectives.is_empty());
        assert!(!record.materials.is_empty());
        assert!(!record.procedure.introduction.is_empty());
        assert!(!record.procedure.main_activity.is_empty());
        assert!(!record.procedure.conclusion.is_empty());
        assert!(!record.assessment.is_empty());
        assert!(!record.extensions.is_empty());
        assert!(!record.notes.is_empty());
    }

    #[tokio::test]
    async fn test_template_mode_is_deterministic() {
        let generator = template();
        let first = generator.generate(&params()).await.unwrap();
        let second = generator.generate(&params()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_template_mode_uses_objectives_and_instructions() {
        let params = GenerationParams::parse(
            "Biology",
            "6-8",
            "60 minutes",
            "- label parts of a cell\n- compare plant and animal cells",
            Some("Use microscopes"),
        )
        .unwrap();

        let record = template().generate(&params).await.unwrap();
        assert_eq!(record.objectives[0], "label parts of a cell");
        assert_eq!(record.objectives[1], "compare plant and animal cells");
        assert!(record.notes.contains("Use microscopes"));
    }

    #[tokio::test]
    async fn test_blank_template_overrides_fall_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = dir.path().join(".lessonplan/prompts");
        std::fs::create_dir_all(&prompts).unwrap();
        std::fs::write(prompts.join("template-notes.pmt"), "   ").unwrap();
        std::fs::write(prompts.join("template-extensions.pmt"), "").unwrap();
        std::fs::write(prompts.join("template-title.pmt"), "{{no_such_field}}\n").unwrap();
        std::fs::write(prompts.join("template-assessment.pmt"), "Oral quiz on {{subject}}").unwrap();

        let generator = Generator::new(
            GenerationMode::Template { delay: Duration::ZERO },
            PromptLoader::new(dir.path()),
        );
        let record = generator.generate(&params()).await.unwrap();
        let builtin = template().generate(&params()).await.unwrap();

        assert_eq!(record.notes, builtin.notes);
        assert!(!record.notes.is_empty());
        assert_eq!(record.extensions, builtin.extensions);
        assert!(!record.extensions.is_empty());
        assert_eq!(record.title, builtin.title);
        assert_eq!(record.assessment, "Oral quiz on Algebra");
    }

    #[tokio::test]
    async fn test_template_mode_waits_for_delay() {
        let generator = Generator::new(
            GenerationMode::Template {
                delay: Duration::from_millis(50),
            },
            PromptLoader::embedded_only(),
        );

        let start = std::time::Instant::now();
        generator.generate(&params()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_remote_mode_assembles_completion() {
        let client = Arc::new(MockLlmClient::with_text(
            "Title: Solving for X\nOverview: Balance both sides.\nObjectives:\n- Isolate x\nTeacher Notes: Go slow.",
        ));
        let record = remote(client.clone()).generate(&params()).await.unwrap();

        assert_eq!(record.title, "Solving for X");
        assert_eq!(record.overview, "Balance both sides.");
        assert_eq!(record.objectives, vec!["Isolate x"]);
        assert_eq!(record.notes, "Go slow.");
        assert_eq!(record.procedure.main_activity, "");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_remote_request_shape() {
        let client = Arc::new(MockLlmClient::with_text("Title: T"));
        remote(client.clone()).generate(&params()).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.system_prompt.contains("education specialist"));
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.messages.len(), 1);
        assert!(request.messages[0].content.contains("Algebra class for 9-10 grade students"));
        assert!(request.messages[0].content.contains("solve linear equations"));
    }

    #[tokio::test]
    async fn test_remote_error_propagates_without_retry() {
        let client = Arc::new(MockLlmClient::new(vec![
            Err(LlmError::ApiError {
                status: 429,
                message: "Rate limit reached".to_string(),
            }),
            Ok(CompletionResponse::text("Title: never used")),
        ]));

        let err = remote(client.clone()).generate(&params()).await.unwrap_err();
        assert!(matches!(err, GenerateError::RemoteService(LlmError::ApiError { status: 429, .. })));
        assert_eq!(err.to_string(), "Remote service error: Rate limit reached");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_remote_empty_content_is_error() {
        let client = Arc::new(MockLlmClient::new(vec![Ok(CompletionResponse::default())]));
        let err = remote(client).generate(&params()).await.unwrap_err();
        assert!(matches!(err, GenerateError::RemoteService(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_from_config_template_override() {
        let generator = Generator::from_config(
            &Config::default(),
            Some(ModeSetting::Template),
            PromptLoader::embedded_only(),
        )
        .unwrap();
        assert_eq!(generator.mode().name(), "template");
    }
}
