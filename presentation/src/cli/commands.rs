//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use ideascore_domain::{ProviderKind, ValidationRequest};
use std::path::PathBuf;

/// Output format for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted report with scores, breakdowns and feedback
    Pretty,
    /// JSON envelope: {"success": true, "data": ...}
    Json,
}

/// CLI arguments for ideascore
#[derive(Parser, Debug)]
#[command(name = "ideascore")]
#[command(author, version, about = "Score a business idea against market signals")]
#[command(long_about = r#"
ideascore scores a business idea on seven dimensions (problem clarity, market
potential, feasibility, technical complexity, monetization, time to market,
competition) using text heuristics enriched by external signals: search
trends, competitor discovery, community sentiment and funding data.

Configuration files are loaded from (in priority order):
1. IDEASCORE_* environment variables
2. --config <path>     Explicit config file
3. ./ideascore.toml    Project-level config
4. ~/.config/ideascore/config.toml   Global config

Example:
  ideascore validate --description "An app that automates invoicing for freelancers"
  ideascore validate --problem "Manual invoicing" --solution "A SaaS tool" -o json
  ideascore validate --input idea.json --offline
  ideascore status
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an idea and print its report
    Validate(ValidateArgs),
    /// Show which providers and the text generator are enabled and configured
    Status,
}

#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Free-text description of the idea
    #[arg(short, long, value_name = "TEXT", conflicts_with_all = ["problem", "input"])]
    pub description: Option<String>,

    /// Problem being solved (structured input)
    #[arg(long, value_name = "TEXT", conflicts_with = "input")]
    pub problem: Option<String>,

    /// Proposed solution
    #[arg(long, value_name = "TEXT", requires = "problem")]
    pub solution: Option<String>,

    /// Target market
    #[arg(long, value_name = "TEXT", requires = "problem")]
    pub market: Option<String>,

    /// Known competition
    #[arg(long, value_name = "TEXT", requires = "problem")]
    pub competition: Option<String>,

    /// Team background
    #[arg(long, value_name = "TEXT", requires = "problem")]
    pub team: Option<String>,

    /// Read the request from a JSON file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format (defaults to the configured format, then pretty)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable a provider for this run (repeatable)
    #[arg(long, value_name = "PROVIDER")]
    pub disable: Vec<ProviderKind>,

    /// Disable every network provider and the text generator
    #[arg(long)]
    pub offline: bool,
}

impl ValidateArgs {
    /// Request built from the inline flags. `--input` is read by the caller.
    pub fn inline_request(&self) -> ValidationRequest {
        ValidationRequest {
            description: self.description.clone(),
            problem: self.problem.clone(),
            solution: self.solution.clone(),
            market: self.market.clone(),
            competition: self.competition.clone(),
            team: self.team.clone(),
        }
    }
}
