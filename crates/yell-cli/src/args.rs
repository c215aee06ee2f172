use crate::types::{ColorMode, LogLevel, OutputPath};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yell")]
#[command(about = "Render JSON or TOML documents as boxed, colorized trees", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Documents to render (.json, .toml or plain text). Reads stdin when empty.
    pub files: Vec<PathBuf>,

    /// Output path: a plain print or one of the severity boxes
    #[arg(long = "as", value_name = "PATH", default_value = "print")]
    pub output: OutputPath,

    #[arg(long)]
    pub width: Option<usize>,

    #[arg(long)]
    pub indent: Option<usize>,

    /// Cut long lines instead of wrapping them
    #[arg(long)]
    pub truncate: bool,

    /// Let long lines overflow
    #[arg(long, conflicts_with = "truncate")]
    pub no_wrap: bool,

    #[arg(long)]
    pub no_timestamp: bool,

    /// Title for collapsed headers when several documents come from one file
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Settings file (defaults to ./yell.toml, then the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
