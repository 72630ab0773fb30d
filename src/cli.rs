use clap::Parser;
use std::path::PathBuf;

/// Minimal HTTP relay for chat conversations.
#[derive(Parser, Debug)]
#[command(name = "chat-relay", version, about)]
pub struct Cli {
    /// Listen port (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a .env config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose (trace) logging
    #[arg(short, long)]
    pub verbose: bool,
}
