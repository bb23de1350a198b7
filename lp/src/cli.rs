//! CLI command definitions and subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ModeSetting;

/// Lesson plan generator
#[derive(Parser)]
#[command(
    name = "lessonplan",
    about = "Generate structured lesson plans with an LLM or offline templates",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a lesson plan
    Generate {
        /// Subject of the lesson (at least 2 characters)
        #[arg(short, long)]
        subject: String,

        /// Grade level (K-2, 3-5, 6-8, 9-10, 11-12, college)
        #[arg(short, long)]
        grade: String,

        /// Lesson duration (30 minutes, 45 minutes, 60 minutes, 90 minutes, 2 hours, multiple days)
        #[arg(short, long)]
        duration: String,

        /// What students should learn (at least 10 characters)
        #[arg(short, long)]
        objectives: String,

        /// Extra requirements, teaching approaches or student needs
        #[arg(short, long)]
        instructions: Option<String>,

        /// Generation mode (auto, remote, template); overrides the config file
        #[arg(short, long)]
        mode: Option<ModeSetting>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write a text export into this directory
        #[arg(short, long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// Extract a lesson plan from previously generated text
    Parse {
        /// File with raw completion text ("-" for stdin)
        file: PathBuf,

        /// Subject used for the fallback title
        #[arg(short, long)]
        subject: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List accepted grade levels and durations
    Options,
}

/// Output format for generated plans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Document,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "doc" | "document" | "markdown" => Ok(Self::Document),
            _ => Err(format!("Unknown format: {}. Use: text, json, or document", s)),
        }
    }
}

/// Path of the log file written by the binary
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lessonplan")
        .join("logs")
        .join("lessonplan.log")
}
