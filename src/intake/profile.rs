//! Client profile records matching the advisor book export format

use serde::{Deserialize, Serialize};

/// One client's intake figures from the advisor book
///
/// Currency amounts are whole units, matching the canonical digit-string
/// convention of the interactive forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(rename = "ClientID")]
    pub client_id: u32,

    #[serde(rename = "FullName")]
    pub full_name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "CurrentAge")]
    pub current_age: u32,

    #[serde(rename = "RetirementAge")]
    pub retirement_age: u32,

    #[serde(rename = "MonthlyIncome")]
    pub monthly_income: u64,

    #[serde(rename = "YearsAfterRetirement")]
    pub years_after_retirement: u32,

    #[serde(rename = "MonthlyHousing")]
    pub monthly_housing: u64,

    #[serde(rename = "MonthlyUtilities")]
    pub monthly_utilities: u64,

    #[serde(rename = "MonthlyFood")]
    pub monthly_food: u64,

    #[serde(rename = "MonthlyTransport")]
    pub monthly_transport: u64,

    #[serde(rename = "MonthlyEducation")]
    pub monthly_education: u64,

    #[serde(rename = "SupportYears")]
    pub support_years: u32,

    #[serde(rename = "ExistingCoverage")]
    pub existing_coverage: u64,

    #[serde(rename = "ChildAge")]
    pub child_age: u32,

    #[serde(rename = "AnnualCollegeFee")]
    pub annual_college_fee: u64,

    #[serde(rename = "CollegeSaved")]
    pub college_saved: u64,

    #[serde(rename = "HealthFundNeeded")]
    pub health_fund_needed: u64,

    #[serde(rename = "HealthMonthlyContribution")]
    pub health_monthly_contribution: u64,

    #[serde(rename = "GoalPurpose")]
    pub goal_purpose: String,

    #[serde(rename = "GoalDetail", default)]
    pub goal_detail: String,

    #[serde(rename = "GoalCost")]
    pub goal_cost: u64,

    #[serde(rename = "GoalYears")]
    pub goal_years: u32,
}

impl ClientProfile {
    /// Expense category amounts in the breakdown order used by the forms
    pub fn expense_amounts(&self) -> [(&'static str, u64); 5] {
        [
            ("housing", self.monthly_housing),
            ("utilities", self.monthly_utilities),
            ("food", self.monthly_food),
            ("transport", self.monthly_transport),
            ("education", self.monthly_education),
        ]
    }
}
