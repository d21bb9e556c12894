mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::inspect::{OverridesArgs, ResolveArgs};
use commands::summary::{LoanArgs, SummaryArgs};

/// Loan summary tables from CMBS disclosure JSON
#[derive(Parser)]
#[command(
    name = "loansum",
    version,
    about = "Loan summary tables from CMBS disclosure JSON",
    long_about = "Builds a flat loan summary table (balance, rate, DSCR, debt yield, LTV, \
                  occupancy, top tenant, term, maturity) from a JSON document of \
                  inconsistently-shaped CMBS loan records."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the summary table for every loan in a document
    Summary(SummaryArgs),
    /// Build the summary row for one loan
    Loan(LoanArgs),
    /// Show which candidate path resolves for a loan
    Resolve(ResolveArgs),
    /// Print the effective override tables
    Overrides(OverridesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Summary(args) => commands::summary::run_summary(args),
        Commands::Loan(args) => commands::summary::run_loan(args),
        Commands::Resolve(args) => commands::inspect::run_resolve(args),
        Commands::Overrides(args) => commands::inspect::run_overrides(args),
        Commands::Version => {
            println!("loansum {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
