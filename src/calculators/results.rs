//! Flat result records produced by the calculators
//!
//! A record is derived wholly from a field store; it is never a source of
//! truth of its own. Values keep full floating-point precision; rounding to
//! two decimals happens only when a record is formatted for display.

use serde::{Deserialize, Serialize};

use super::CalculatorKind;

/// Life protection coverage gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeProtectionResult {
    pub total_monthly_expenses: f64,
    pub support_years: u32,
    pub support_factor: f64,
    pub existing_coverage: f64,
    pub protection_need: f64,
}

/// Years needed to reach a health fund target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthFundResult {
    pub fund_needed: f64,
    pub monthly_contribution: f64,
    pub years_to_goal: f64,
    pub whole_years: u32,
    pub extra_months: u32,
}

/// Education fund projection and required monthly saving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationFundResult {
    pub child_age: u32,
    pub years_until_college: u32,
    pub annual_fee: f64,
    pub cost_factor: f64,
    pub future_cost: f64,
    pub already_saved: f64,
    pub remaining_needed: f64,
    pub monthly_savings: f64,
}

/// Retirement income target and required monthly saving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub years_until_retirement: u32,
    pub annual_retirement_income: f64,
    pub total_needed: f64,
    pub inflation_multiplier: f64,
    pub future_value: f64,
    pub monthly_savings: f64,
}

/// Inflated future price of a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalResult {
    pub goal: String,
    pub client_name: String,
    pub current_cost: f64,
    pub years_until_goal: u32,
    pub inflation_factor: f64,
    pub future_amount_needed: f64,
}

/// The derived output of one completed calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator")]
pub enum ResultRecord {
    LifeProtection(LifeProtectionResult),
    HealthFund(HealthFundResult),
    EducationFund(EducationFundResult),
    Retirement(RetirementResult),
    SavingsGoal(SavingsGoalResult),
}

impl ResultRecord {
    /// Which calculator produced this record
    pub fn kind(&self) -> CalculatorKind {
        match self {
            ResultRecord::LifeProtection(_) => CalculatorKind::LifeProtection,
            ResultRecord::HealthFund(_) => CalculatorKind::HealthFund,
            ResultRecord::EducationFund(_) => CalculatorKind::EducationFund,
            ResultRecord::Retirement(_) => CalculatorKind::Retirement,
            ResultRecord::SavingsGoal(_) => CalculatorKind::SavingsGoal,
        }
    }

    /// Base name for the exported result document
    pub fn export_basename(&self) -> &'static str {
        match self {
            ResultRecord::LifeProtection(_) => "Life-Protection-Result",
            ResultRecord::HealthFund(_) => "Health-Fund-Result",
            ResultRecord::EducationFund(_) => "Education-Fund-Result",
            ResultRecord::Retirement(_) => "Retirement-Result",
            ResultRecord::SavingsGoal(_) => "Savings-Goal-Result",
        }
    }

    /// The single headline figure of this record
    pub fn headline_amount(&self) -> f64 {
        match self {
            ResultRecord::LifeProtection(r) => r.protection_need,
            ResultRecord::HealthFund(r) => r.years_to_goal,
            ResultRecord::EducationFund(r) => r.monthly_savings,
            ResultRecord::Retirement(r) => r.monthly_savings,
            ResultRecord::SavingsGoal(r) => r.future_amount_needed,
        }
    }
}
