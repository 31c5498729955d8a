//! Mataram CLI binary.
//!
//! Checks a single security against the index inclusion thresholds using
//! market data fetched from Yahoo Finance.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use mataram::{EligibilityCriteria, EligibilityEvaluator, EligibilityReport, FreeFloat};
use mataram_data::YahooSnapshotProvider;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mataram")]
#[command(about = "Mataram: index inclusion eligibility screener", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one security against the inclusion criteria
    Check {
        /// Exchange-qualified ticker symbol (e.g. BREN.JK)
        symbol: String,

        /// Free-float percentage: shares held by the public, per exchange data
        #[arg(long, default_value_t = FreeFloat::DEFAULT_PCT)]
        free_float: f64,

        /// Trailing history window in days
        #[arg(long, default_value_t = 365)]
        period_days: u32,

        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the active inclusion thresholds
    Criteria {
        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            symbol,
            free_float,
            period_days,
            format,
        } => check_symbol(&symbol, free_float, period_days, &format).await,
        Commands::Criteria { format } => print_criteria(&format),
    }
}

async fn check_symbol(
    symbol: &str,
    free_float_pct: f64,
    period_days: u32,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let symbol = symbol.to_uppercase();
    let free_float = FreeFloat::new(free_float_pct)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching market data for {symbol}..."));

    let provider = YahooSnapshotProvider::new();
    let snapshot = match provider.fetch_snapshot(&symbol, period_days).await {
        Ok(snapshot) => {
            pb.finish_and_clear();
            snapshot
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(format!("Failed to fetch market data for {symbol}: {e}").into());
        }
    };

    let evaluator = EligibilityEvaluator::new();
    let result = evaluator.evaluate(&snapshot, free_float);
    let report = EligibilityReport::new(&snapshot, free_float, evaluator.criteria().clone(), result);

    if format.eq_ignore_ascii_case("json") {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_ascii_table());
    }

    Ok(())
}

fn print_criteria(format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let criteria = EligibilityCriteria::default();

    if format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&criteria)?);
    } else {
        println!("Inclusion criteria:");
        println!("===================\n");
        println!(
            "  Total market cap        >= {:.2} T",
            criteria.min_total_market_cap / 1e12
        );
        println!(
            "  Free-float market cap   >= {:.2} T",
            criteria.min_free_float_market_cap / 1e12
        );
        println!(
            "  ATVR (liquidity)        >= {:.2} %",
            criteria.min_atvr * 100.0
        );
    }

    Ok(())
}
