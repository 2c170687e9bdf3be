//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Writing-sample personality analysis from hosted language models
#[derive(Parser)]
#[command(name = "persona", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a writing sample and render the personality report
    Analyze(AnalyzeArgs),
    /// Inspect and test completion services
    Services {
        #[command(subcommand)]
        action: ServicesAction,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Writing sample (reads stdin when neither this nor --file is given)
    pub text: Option<String>,

    /// Read the writing sample from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Service to use (huggingface, ollama). Uses PERSONA_SERVICE env if not set.
    #[arg(long)]
    pub service: Option<String>,

    /// Model to use. Uses PERSONA_MODEL env if not set.
    #[arg(long)]
    pub model: Option<String>,

    /// Stream tokens as they are generated
    #[arg(long)]
    pub stream: bool,

    /// Maximum tokens to generate (default: 500)
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (default: 0.7)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Write the structured report to personality_analysis.json
    #[arg(long)]
    pub save: bool,

    /// Destination for the saved report (implies --save)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ServicesAction {
    /// List all registered services
    List,
    /// Test service connectivity
    Test {
        /// Service ID
        service: String,
    },
    /// List available models
    Models {
        /// Service ID
        service: String,
    },
}
