//! Lesson plan generator
//!
//! CLI entry point.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use lessonplan::cli::{Cli, Command, OutputFormat, get_log_path};
use lessonplan::config::{Config, ModeSetting};
use lessonplan::domain::{GenerationParams, GradeLevel, LessonDuration, LessonPlanRecord};
use lessonplan::export::{to_document, write_export};
use lessonplan::extract::assemble;
use lessonplan::generator::Generator;
use lessonplan::prompts::PromptLoader;
use lessonplan::render::render_plan;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(
        "Loaded config: provider={}, model={}, mode={:?}",
        config.llm.provider, config.llm.model, config.generator.mode
    );

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Generate {
            subject,
            grade,
            duration,
            objectives,
            instructions,
            mode,
            format,
            export,
        }) => {
            let parsed = GenerationParams::parse(&subject, &grade, &duration, &objectives, instructions.as_deref());
            let params = match parsed {
                Ok(params) => params,
                Err(e) => {
                    eprintln!("{} {}", "Invalid input:".red().bold(), e);
                    std::process::exit(2);
                }
            };
            cmd_generate(&config, &params, mode, format, export.as_deref()).await
        }
        Some(Command::Parse { file, subject, format }) => cmd_parse(&file, &subject, format),
        Some(Command::Options) => cmd_options(),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Generate a plan and print/export it
async fn cmd_generate(
    config: &Config,
    params: &GenerationParams,
    mode: Option<ModeSetting>,
    format: OutputFormat,
    export: Option<&Path>,
) -> Result<()> {
    let prompts = PromptLoader::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let generator = Generator::from_config(config, mode, prompts).context("Failed to set up generator")?;

    if matches!(format, OutputFormat::Text) {
        eprintln!("{}", format!("Generating lesson plan ({} mode)...", generator.mode().name()).dimmed());
    }

    let record = match generator.generate(params).await {
        Ok(record) => record,
        Err(e) => {
            eprintln!(
                "{} Please try again or check your inputs.",
                "Error generating lesson plan.".red().bold()
            );
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    print_record(&record, format)?;

    if let Some(dir) = export {
        let path = write_export(dir, &record)?;
        eprintln!("{} {}", "Lesson plan exported:".green(), path.display());
    }
    Ok(())
}

/// Run the extraction pipeline on saved completion text
fn cmd_parse(file: &Path, subject: &str, format: OutputFormat) -> Result<()> {
    let raw_text = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?
    };

    // Only the subject feeds the fallback title; the other values are placeholders
    let params = GenerationParams::new(
        subject,
        GradeLevel::College,
        LessonDuration::Minutes60,
        "extracted from saved text",
        None,
    )
    .context("Invalid subject")?;

    let record = assemble(&raw_text, &params);
    print_record(&record, format)
}

fn print_record(record: &LessonPlanRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", render_plan(record)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Document => print!("{}", to_document(record)),
    }
    Ok(())
}

/// List accepted grade levels and durations
fn cmd_options() -> Result<()> {
    println!("{}", "Grade levels:".bold());
    for grade in GradeLevel::ALL {
        println!("  {:<10} {}", grade.as_str(), grade.label().dimmed());
    }
    println!("{}", "Durations:".bold());
    for duration in LessonDuration::ALL {
        println!("  {}", duration.as_str());
    }
    Ok(())
}
