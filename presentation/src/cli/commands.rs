//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for lingua-tutor
#[derive(Parser, Debug)]
#[command(name = "lingua-tutor")]
#[command(version, about = "Language-tutor backend - exercise generation over a generative text service")]
#[command(long_about = r#"
Serves the language-tutor API: conversational tutoring replies, vocabulary
exercises, grammar quizzes, and filler-word correction.

Configuration files are loaded from (in priority order):
1. TUTOR_* environment variables
2. --config <path>     Explicit config file
3. ./tutor.toml        Project-level config
4. ~/.config/lingua-tutor/config.toml   Global config

The generation service API key comes from [generator].api_key or the
GROQ_API_KEY environment variable.

Example:
  lingua-tutor
  lingua-tutor --bind 0.0.0.0:8080 -vv
"#)]
pub struct Cli {
    /// Path to an explicit config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Bind address override (host:port)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
