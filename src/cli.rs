//! CLI argument parsing for cityplist

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cpl")]
#[command(author, version, about = "Fetch the world-cities dataset and write it as a binary plist", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the dataset URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Override the output plist path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
