//! Run every calculator for an entire advisor book
//!
//! Reads client profiles from CSV, computes the five planning results per
//! client in parallel, and writes one summary row per client.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

use advisory_system::{
    calculators::ResultRecord, export::format_currency, intake::load_profiles, CalculatorKind,
    ClientResults, SessionRunner,
};

#[derive(Debug, Parser)]
#[command(name = "run_clients", about = "Run the planning calculators over an advisor book")]
struct Args {
    /// Client profile CSV to read
    #[arg(long, default_value = "client_profiles.csv")]
    input: PathBuf,

    /// Summary CSV to write
    #[arg(long, default_value = "client_results.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading profiles from {}...", args.input.display());

    let profiles = load_profiles(&args.input)
        .with_context(|| format!("could not load {}", args.input.display()))?;
    println!("Loaded {} profile(s) in {:?}", profiles.len(), start.elapsed());

    let runner = SessionRunner::new();

    println!("Running calculators...");
    let run_start = Instant::now();
    let results: Vec<ClientResults> = profiles
        .par_iter()
        .map(|profile| runner.run_all(profile))
        .collect();
    println!("Calculations complete in {:?}", run_start.elapsed());

    write_summary(&args.output, &results)
        .with_context(|| format!("could not write {}", args.output.display()))?;
    println!("Output written to {}", args.output.display());

    print_totals(&results);
    Ok(())
}

fn write_summary(path: &PathBuf, results: &[ClientResults]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(
        file,
        "ClientID,Name,ProtectionNeed,HealthYearsToGoal,CollegeMonthlySavings,RetirementMonthlySavings,GoalFutureAmount,Skipped"
    )?;

    for client in results {
        let protection = amount(client, CalculatorKind::LifeProtection);
        let health = amount(client, CalculatorKind::HealthFund);
        let college = amount(client, CalculatorKind::EducationFund);
        let retirement = amount(client, CalculatorKind::Retirement);
        let goal = amount(client, CalculatorKind::SavingsGoal);
        let skipped: Vec<&str> = client
            .skipped
            .iter()
            .map(|error| error.kind.title())
            .collect();

        writeln!(
            file,
            "{},\"{}\",{:.2},{:.2},{:.2},{:.2},{:.2},\"{}\"",
            client.client_id,
            client.client_name,
            protection,
            health,
            college,
            retirement,
            goal,
            skipped.join("; "),
        )?;
    }

    file.flush()
}

fn amount(client: &ClientResults, kind: CalculatorKind) -> f64 {
    client
        .record(kind)
        .map(ResultRecord::headline_amount)
        .unwrap_or(0.0)
}

fn print_totals(results: &[ClientResults]) {
    let clients = results.len();
    let completed: usize = results.iter().map(|c| c.records.len()).sum();
    let skipped: usize = results.iter().map(|c| c.skipped.len()).sum();
    let total_protection: f64 = results
        .iter()
        .map(|c| amount(c, CalculatorKind::LifeProtection))
        .sum();
    let total_monthly_savings: f64 = results
        .iter()
        .map(|c| amount(c, CalculatorKind::Retirement) + amount(c, CalculatorKind::EducationFund))
        .sum();

    println!("\nBook Summary:");
    println!("  Clients:                 {}", clients);
    println!("  Calculations completed:  {}", completed);
    println!("  Calculations skipped:    {}", skipped);
    println!(
        "  Total protection need:   {}",
        format_currency(total_protection)
    );
    println!(
        "  Total monthly savings:   {}",
        format_currency(total_monthly_savings)
    );
}
