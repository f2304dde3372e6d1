use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Study random English words with their Korean translations
#[derive(Debug, Parser)]
#[command(name = "daneo", version)]
pub struct Cli {
    /// Number of words in the session
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// JSON config file; environment variables are used otherwise
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the finished word list as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
