//! Payroll demo.
//!
//! Usage: payroll-demo [--roster <FILE>] [--sale <ID=AMOUNT>...] [--json] [-v...]
//!
//! Builds an organization from the built-in sample roster (or a YAML roster
//! file), records any extra sales given on the command line, and prints the
//! employee list with aggregate statistics.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::Level;

use payroll_engine::config::RosterLoader;
use payroll_engine::validation::coerce_non_negative;

/// Payroll demo - prints a roster and its payroll statistics
#[derive(Parser, Debug)]
#[command(name = "payroll-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML roster to load instead of the built-in sample
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Extra sale to record after loading, as ID=AMOUNT (repeatable)
    #[arg(long = "sale", value_name = "ID=AMOUNT")]
    sales: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn parse_sale(raw: &str) -> Result<(u32, Decimal)> {
    let (id, amount) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ID=AMOUNT, got '{}'", raw))?;
    let id = id
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid employee id in '{}'", raw))?;
    Ok((id, coerce_non_negative("amount", amount)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level(cli.verbose).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let loader = match &cli.roster {
        Some(path) => RosterLoader::load(path)?,
        None => RosterLoader::sample(),
    };
    let mut organization = loader
        .build_organization()
        .context("failed to build organization from roster")?;
    for raw in &cli.sales {
        let (id, amount) = parse_sale(raw)?;
        organization
            .record_sale(id, amount)
            .with_context(|| format!("failed to record sale '{}'", raw))?;
    }
    let report = organization
        .report()
        .context("failed to compute payroll report")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Running payroll demo...");
    println!();
    println!("{}", report);
    println!();
    println!("Demo finished");
    Ok(())
}
