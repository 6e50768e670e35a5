use clap::Parser;
use std::path::PathBuf;

/// Author short text and image stories in the terminal and play them back
/// as a swipeable reel.
#[derive(Debug, Clone, Parser)]
#[command(name = "storyreel", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/storyreel/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Open a previously saved story
    #[arg(long, value_name = "FILE")]
    pub open: Option<PathBuf>,

    /// Directory where drafts and published stories are written
    #[arg(long, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Keep saves in memory instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}
