use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use receipt_points::{demo_items, Receipt, ScoreBreakdown};

#[derive(Parser)]
#[command(name = "receipt-points", version, about = "Score purchase receipts for loyalty points")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a receipt stored as JSON
    Score {
        /// Path to the receipt JSON file
        file: PathBuf,
    },
    /// Print the demo item list as JSON
    Items,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score { file } => run_score(&file),
        Command::Items => run_items(),
    }
}

fn run_score(file: &Path) -> Result<()> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("Failed to read receipt file: {:?}", file))?;
    let receipt = Receipt::from_json(&json)
        .with_context(|| format!("Failed to parse receipt: {:?}", file))?;

    let breakdown = ScoreBreakdown::for_receipt(&receipt);

    println!("🧾 {} ({} {})", receipt.retailer, receipt.purchase_date, receipt.purchase_time);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for entry in &breakdown.rules {
        println!("  {:<20} {:>5}", entry.rule.name(), entry.points);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:<20} {:>5}", "total", breakdown.total());

    Ok(())
}

fn run_items() -> Result<()> {
    let json = serde_json::to_string_pretty(&demo_items()).context("Failed to encode items")?;
    println!("{}", json);

    Ok(())
}
