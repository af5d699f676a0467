mod cli;
mod config;
mod error;
mod extract;
mod lexicon;
mod report;
mod score;
mod types;

use crate::error::{AtsError, Result};
use crate::extract::MediaType;
use crate::lexicon::Rubric;
use crate::types::report::Analysis;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const LOW_SCORE: i32 = 1;
    pub const BLANK_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const LOW_SCORE_THRESHOLD: f32 = 60.0;
const DEFAULT_REPORT_FILE: &str = "resume_feedback.txt";

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn analyze_document(
    path: &Path,
    media_type: Option<MediaType>,
    config_path: Option<&Path>,
) -> Result<Analysis> {
    if !path.exists() {
        return Err(AtsError::PathNotFound(path.display().to_string()));
    }

    let media_type = media_type.unwrap_or_else(|| MediaType::from_path(path));
    let text = extract::extract_text(path, media_type)?;

    let loaded = match config_path {
        Some(config_path) => Some(config::load_config_file(config_path)?),
        None => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            config::load_config(dir)?
        }
    };
    let rubric = match &loaded {
        Some(cfg) => Rubric::with_config(cfg),
        None => Rubric::default(),
    };

    let analysis = score::analyze(&text, &rubric);
    info!(score = analysis.score, "analysis complete");
    Ok(analysis)
}

fn exit_code_for(analysis: &Analysis) -> i32 {
    if analysis.is_blank_input() {
        exit_code::BLANK_INPUT
    } else if analysis.score < LOW_SCORE_THRESHOLD {
        exit_code::LOW_SCORE
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let analysis =
                analyze_document(&cmd.path, cmd.media_type, cmd.config.as_deref())?;

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&analysis, output_format)?;
            println!("{rendered}");

            Ok(exit_code_for(&analysis))
        }
        cli::Commands::Report(cmd) => {
            let analysis =
                analyze_document(&cmd.path, cmd.media_type, cmd.config.as_deref())?;

            let rendered = report::render(&analysis, report::OutputFormat::Text)?;
            let output = cmd
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE));
            std::fs::write(&output, rendered)?;
            println!("feedback report written to {}", output.display());

            Ok(exit_code_for(&analysis))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
