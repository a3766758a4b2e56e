//! filecloner CLI - mirror a watched folder into another
//!
//! Usage: filecloner --source <DIR> --target <DIR> [--recursive] [--filter <REGEX>]

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::watch::cmd_watch(&cli)
}
