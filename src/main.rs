//! Advisory System CLI
//!
//! Walks one sample client through every calculator and prints the results

use advisory_system::{
    dispatch::{DispatchConfig, LoggingDispatcher},
    export::{format_currency, CsvDocumentWriter, DocumentRenderer, ResultDocument},
    AppointmentIntake, CalculatorKind, ClientProfile, SessionRunner, WizardPhase, WizardSession,
};

fn main() {
    env_logger::init();

    println!("Advisory System v0.1.0");
    println!("======================\n");

    // Walk one retirement session step by step, the way the form does
    let mut session = WizardSession::new(CalculatorKind::Retirement);
    session.set_field("current_age", "30");
    session.set_field("retirement_age", "60");
    session.set_field("monthly_income", "50000");
    session.set_field("years_after_retirement", "20");

    while session.phase() != WizardPhase::Submitted {
        let step = session.current_step();
        if session.next() {
            println!("Step {} complete", step);
        } else {
            println!("Step {} blocked:", step);
            for (field, message) in session.errors() {
                println!("  {}: {}", field, message);
            }
            return;
        }
    }

    if let Some(record) = session.result() {
        println!("\n{} result:", record.kind().title());
        let document = ResultDocument::from_record(&record);
        for (label, value) in &document.lines {
            println!("  {:<32} {:>16}", label, value);
        }
    }

    // Run the full calculator set for a sample client profile
    let profile = sample_profile();
    let runner = SessionRunner::new();
    let results = runner.run_all(&profile);

    println!("\nFull review for {}:", results.client_name);
    println!("{:<18} {:>18}", "Calculator", "Headline");
    println!("{}", "-".repeat(38));
    for record in &results.records {
        println!(
            "{:<18} {:>18}",
            record.kind().title(),
            format_currency(record.headline_amount())
        );
    }
    for skipped in &results.skipped {
        println!("{:<18} {:>18}", skipped.kind.title(), "(skipped)");
    }

    // Write the result documents the way the export collaborator would
    let writer = CsvDocumentWriter::new("results");
    for record in &results.records {
        let document = ResultDocument::from_record(record);
        match writer.render(&document) {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(err) => println!("Could not write {}: {}", document.file_basename, err),
        }
    }

    // Book a sample appointment when dispatch tokens are configured
    match DispatchConfig::from_env() {
        Ok(config) => {
            let dispatcher = LoggingDispatcher::new(config);
            let mut intake = AppointmentIntake::new();
            intake.set_field("first_name", "Maria");
            intake.set_field("last_name", "Santos");
            intake.set_field("age", "34");
            intake.set_field("mobile", "0917 123 4567");
            intake.set_field("email", "maria.santos@example.com");
            intake.set_field("date", "2099-01-04");
            intake.set_field("time", "10:30");
            intake.set_field("purpose", "Retirement");
            intake.set_field("meeting_setup", "Video Call");
            intake.set_consent(true);

            match intake.submit(&dispatcher) {
                Ok(receipt) => println!("\nAppointment dispatched: {}", receipt.reference),
                Err(err) => println!("\nAppointment failed: {}", err),
            }
        }
        Err(err) => {
            println!("\nSkipping appointment demo: {}", err);
        }
    }
}

fn sample_profile() -> ClientProfile {
    ClientProfile {
        client_id: 1,
        full_name: "Maria Santos".to_string(),
        email: "maria.santos@example.com".to_string(),
        current_age: 30,
        retirement_age: 60,
        monthly_income: 50_000,
        years_after_retirement: 20,
        monthly_housing: 8_000,
        monthly_utilities: 2_000,
        monthly_food: 5_000,
        monthly_transport: 3_000,
        monthly_education: 2_000,
        support_years: 5,
        existing_coverage: 50_000,
        child_age: 8,
        annual_college_fee: 100_000,
        college_saved: 200_000,
        health_fund_needed: 120_000,
        health_monthly_contribution: 5_000,
        goal_purpose: "Vehicle".to_string(),
        goal_detail: String::new(),
        goal_cost: 100_000,
        goal_years: 1,
    }
}
