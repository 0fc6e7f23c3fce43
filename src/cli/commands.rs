//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Console mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory for journal files (default: MOODLOG_DIR or current directory)
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Journal owner; prompted for when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
