use crate::extract::MediaType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "atscore",
    version,
    about = "Resume ATS scoring and feedback CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume and print the analysis
    Analyze(AnalyzeCommand),
    /// Score a resume and write the plain-text feedback report
    Report(ReportCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Resume document to score
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Declared media type; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub media_type: Option<MediaType>,

    /// Rubric-extension config file (default: atscore.toml next to the input)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportCommand {
    /// Resume document to score
    pub path: PathBuf,

    /// Destination of the feedback report (default: resume_feedback.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Declared media type; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub media_type: Option<MediaType>,

    /// Rubric-extension config file (default: atscore.toml next to the input)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}
