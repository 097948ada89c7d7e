use crate::adapters::OUTPUT_FORMATS;
use crate::core::batch::BatchFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_one_of, validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "flames")]
#[command(about = "FLAMES compatibility calculator", version)]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Score two names
    Check(CheckArgs),

    /// Show the text for a label code (F, L, A, M, E, S)
    Describe(DescribeArgs),

    /// Score every name pair in a CSV or TSV file
    Batch(BatchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// First name
    pub name1: String,

    /// Second name
    pub name2: String,

    /// Output format: text or json (overrides the config file)
    #[arg(long)]
    pub format: Option<String>,

    /// Bracket cancelled letters instead of striking them through
    #[arg(long)]
    pub plain: bool,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DescribeArgs {
    pub code: String,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Input file with a `name1,name2` header row
    pub input: String,

    /// Output format: csv, tsv or json (overrides the config file)
    #[arg(long)]
    pub format: Option<String>,

    /// Stop at the first invalid row
    #[arg(long)]
    pub fail_fast: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }

        match &self.command {
            Command::Check(args) => {
                if let Some(format) = &args.format {
                    validate_one_of("format", format, &OUTPUT_FORMATS)?;
                }
            }
            Command::Describe(_) => {}
            Command::Batch(args) => {
                validate_path("input", &args.input)?;
                validate_file_extension("input", &args.input, &["csv", "tsv"])?;
                if let Some(format) = &args.format {
                    validate_one_of("format", format, &BatchFormat::NAMES)?;
                }
            }
        }
        Ok(())
    }
}
