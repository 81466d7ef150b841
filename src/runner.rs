//! Batch runner for walking advisor book profiles through the calculators
//!
//! Pre-builds the rate tables once, then seeds a wizard session per
//! calculator from each profile and drives it through every step, so batch
//! results pass the same validation gates as interactive sessions.

use log::warn;
use thiserror::Error;

use crate::calculators::{CalculatorKind, ResultRecord};
use crate::intake::ClientProfile;
use crate::rules::{ErrorMap, ValidationContext};
use crate::tables::RateTables;
use crate::wizard::{WizardPhase, WizardSession};

/// A profile failed a calculator's step validation
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{} step {} blocked by {} field error(s)", kind.title(), step, errors.len())]
pub struct SessionError {
    pub kind: CalculatorKind,
    pub step: u8,
    pub errors: ErrorMap,
}

/// Everything computed for one client
#[derive(Debug, Clone)]
pub struct ClientResults {
    pub client_id: u32,
    pub client_name: String,
    pub records: Vec<ResultRecord>,
    /// Calculators this profile could not complete, with their errors
    pub skipped: Vec<SessionError>,
}

impl ClientResults {
    /// The record for one calculator, if it completed
    pub fn record(&self, kind: CalculatorKind) -> Option<&ResultRecord> {
        self.records.iter().find(|record| record.kind() == kind)
    }
}

/// Pre-loaded runner for batch sessions
#[derive(Debug, Clone)]
pub struct SessionRunner {
    tables: RateTables,
    context: ValidationContext,
}

impl SessionRunner {
    /// Create a runner with the standard tables and the current date
    pub fn new() -> Self {
        Self::with_parts(RateTables::standard(), ValidationContext::current())
    }

    /// Create a runner with explicit tables and validation context
    pub fn with_parts(tables: RateTables, context: ValidationContext) -> Self {
        Self { tables, context }
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Run one calculator for one profile
    ///
    /// The session is driven step by step; the first blocked step aborts
    /// with the offending error map.
    pub fn run(
        &self,
        profile: &ClientProfile,
        kind: CalculatorKind,
    ) -> Result<ResultRecord, SessionError> {
        let mut session =
            WizardSession::with_parts(kind, self.tables.clone(), self.context.clone());
        seed_session(&mut session, profile, kind);

        while session.phase() != WizardPhase::Submitted {
            let step = session.current_step();
            if !session.next() {
                return Err(SessionError {
                    kind,
                    step,
                    errors: session.errors().clone(),
                });
            }
        }

        Ok(session
            .result()
            .unwrap_or_else(|| crate::calculators::compute(kind, session.fields(), &self.tables)))
    }

    /// Run every calculator for one profile
    ///
    /// A calculator the profile cannot complete is skipped with a warning;
    /// the rest of the book run is unaffected.
    pub fn run_all(&self, profile: &ClientProfile) -> ClientResults {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for kind in CalculatorKind::all() {
            match self.run(profile, kind) {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!(
                        "client {} ({}): skipping {}: {}",
                        profile.client_id,
                        profile.full_name,
                        kind.title(),
                        error
                    );
                    skipped.push(error);
                }
            }
        }

        ClientResults {
            client_id: profile.client_id,
            client_name: profile.full_name.clone(),
            records,
            skipped,
        }
    }
}

impl Default for SessionRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_session(session: &mut WizardSession, profile: &ClientProfile, kind: CalculatorKind) {
    match kind {
        CalculatorKind::LifeProtection => {
            for (category, amount) in profile.expense_amounts() {
                session.set_category("monthly_expenses", category, &amount.to_string());
            }
            session.set_field("support_years", &profile.support_years.to_string());
            session.set_field("existing_coverage", &profile.existing_coverage.to_string());
        }
        CalculatorKind::HealthFund => {
            session.set_field("fund_needed", &profile.health_fund_needed.to_string());
            session.set_field(
                "monthly_contribution",
                &profile.health_monthly_contribution.to_string(),
            );
        }
        CalculatorKind::EducationFund => {
            session.set_field("child_age", &profile.child_age.to_string());
            session.set_field("annual_fee", &profile.annual_college_fee.to_string());
            session.set_field("already_saved", &profile.college_saved.to_string());
        }
        CalculatorKind::Retirement => {
            session.set_field("current_age", &profile.current_age.to_string());
            session.set_field("retirement_age", &profile.retirement_age.to_string());
            session.set_field("monthly_income", &profile.monthly_income.to_string());
            session.set_field(
                "years_after_retirement",
                &profile.years_after_retirement.to_string(),
            );
        }
        CalculatorKind::SavingsGoal => {
            session.set_field("goal_purpose", &profile.goal_purpose);
            session.set_field("goal_detail", &profile.goal_detail);
            session.set_field("current_cost", &profile.goal_cost.to_string());
            session.set_field("years_until_goal", &profile.goal_years.to_string());
            session.set_field("full_name", &profile.full_name);
            session.set_field("email", &profile.email);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn runner() -> SessionRunner {
        SessionRunner::with_parts(
            RateTables::standard(),
            ValidationContext::for_date(NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")),
        )
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

    #[test]
    fn test_run_all_completes_every_calculator() {
        let results = runner().run_all(&sample_profile());

        assert_eq!(results.records.len(), 5);
        assert!(results.skipped.is_empty());

        match results.record(CalculatorKind::LifeProtection) {
            Some(ResultRecord::LifeProtection(r)) => {
                assert_relative_eq!(r.protection_need, 1_301_920.0, max_relative = 1e-12);
            }
            other => panic!("unexpected record: {:?}", other),
        }

        match results.record(CalculatorKind::SavingsGoal) {
            Some(ResultRecord::SavingsGoal(r)) => {
                assert_relative_eq!(r.future_amount_needed, 104_000.0, max_relative = 1e-12);
                assert_eq!(r.client_name, "Maria Santos");
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_profile_skips_only_the_affected_calculator() {
        let mut profile = sample_profile();
        profile.retirement_age = 25; // below the current age

        let results = runner().run_all(&profile);

        assert_eq!(results.records.len(), 4);
        assert_eq!(results.skipped.len(), 1);
        assert_eq!(results.skipped[0].kind, CalculatorKind::Retirement);
        assert_eq!(results.skipped[0].step, 1);
        assert!(results.skipped[0].errors.contains_key("retirement_age"));
        assert!(results.record(CalculatorKind::HealthFund).is_some());
    }

    #[test]
    fn test_batch_matches_direct_computation() {
        let profile = sample_profile();
        let record = runner()
            .run(&profile, CalculatorKind::HealthFund)
            .expect("profile is valid");

        match record {
            ResultRecord::HealthFund(r) => {
                assert_relative_eq!(r.years_to_goal, 2.0, max_relative = 1e-12);
            }
            other => panic!("unexpected record: {:?}", other),
        }
    }
}
