//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// filecloner - watch a folder and duplicate changes to another folder
#[derive(Parser, Debug)]
#[command(name = "filecloner")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Deletions in the source folder are reported but never mirrored.")]
pub struct Cli {
    /// Source folder to watch
    #[arg(long, value_name = "DIR")]
    pub source: PathBuf,

    /// Target folder to copy files to
    #[arg(long, value_name = "DIR")]
    pub target: PathBuf,

    /// Include subdirectories in the initial sync and live watching
    #[arg(short, long)]
    pub recursive: bool,

    /// Only mirror paths matching this regex (matched anywhere in the path)
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}
