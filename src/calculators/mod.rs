//! Calculator definitions, formulas, and result computation
//!
//! `compute` is a pure function from a field store and the rate tables to a
//! flat result record. It is total over any store contents: coercion
//! defaults unparseable entries to zero, so it is safe to re-run live while
//! a review step is being edited. Validation is the wizard's concern and
//! happens before a session ever reaches the review step.

pub mod definitions;
pub mod formulas;
pub mod results;

pub use definitions::{
    CalculatorDefinition, CalculatorKind, FieldKind, FieldSpec, StepScope, EXPENSE_CATEGORIES,
    GOAL_OPTIONS,
};
pub use formulas::{annuity_accumulation, annuity_payment, years_and_months};
pub use results::{
    EducationFundResult, HealthFundResult, LifeProtectionResult, ResultRecord, RetirementResult,
    SavingsGoalResult,
};

use crate::intake::FieldStore;
use crate::tables::RateTables;

/// Age at which college is assumed to start
const COLLEGE_START_AGE: i64 = 18;

/// Years of fees covered by one course
const COLLEGE_COURSE_YEARS: f64 = 4.0;

/// Derive the result record for a calculator from the current field values
pub fn compute(kind: CalculatorKind, store: &FieldStore, tables: &RateTables) -> ResultRecord {
    match kind {
        CalculatorKind::LifeProtection => ResultRecord::LifeProtection(life_protection(store, tables)),
        CalculatorKind::HealthFund => ResultRecord::HealthFund(health_fund(store)),
        CalculatorKind::EducationFund => ResultRecord::EducationFund(education_fund(store, tables)),
        CalculatorKind::Retirement => ResultRecord::Retirement(retirement(store, tables)),
        CalculatorKind::SavingsGoal => ResultRecord::SavingsGoal(savings_goal(store, tables)),
    }
}

/// need = max(0, 12 * monthly expenses * support factor - existing coverage)
fn life_protection(store: &FieldStore, tables: &RateTables) -> LifeProtectionResult {
    let total_monthly_expenses = store.breakdown_total("monthly_expenses");
    let support_years = store.integer_or_zero("support_years").max(0) as u32;
    let support_factor = tables.expense_support.factor(support_years);
    let existing_coverage = store.number_or_zero("existing_coverage");

    let protection_need =
        (12.0 * total_monthly_expenses * support_factor - existing_coverage).max(0.0);

    LifeProtectionResult {
        total_monthly_expenses,
        support_years,
        support_factor,
        existing_coverage,
        protection_need,
    }
}

/// years = target / (12 * monthly contribution), zero contribution needs no time
fn health_fund(store: &FieldStore) -> HealthFundResult {
    let fund_needed = store.number_or_zero("fund_needed");
    let monthly_contribution = store.number_or_zero("monthly_contribution");

    let years_to_goal = if monthly_contribution > 0.0 {
        fund_needed / (12.0 * monthly_contribution)
    } else {
        0.0
    };
    let (whole_years, extra_months) = years_and_months(years_to_goal);

    HealthFundResult {
        fund_needed,
        monthly_contribution,
        years_to_goal,
        whole_years,
        extra_months,
    }
}

/// Four years of fees, escalated to college start, less what is saved,
/// financed by a level monthly saving at the education rate
fn education_fund(store: &FieldStore, tables: &RateTables) -> EducationFundResult {
    let child_age = store.integer_or_zero("child_age").max(0) as u32;
    let years_until_college = (COLLEGE_START_AGE - child_age as i64).max(0) as u32;
    let annual_fee = store.number_or_zero("annual_fee");
    let already_saved = store.number_or_zero("already_saved");

    let cost_factor = tables.college_cost.factor(years_until_college);
    let future_cost = annual_fee * COLLEGE_COURSE_YEARS * cost_factor;
    let remaining_needed = (future_cost - already_saved).max(0.0);
    let monthly_savings = annuity_payment(
        remaining_needed,
        tables.education_savings_rate / 12.0,
        years_until_college * 12,
    );

    EducationFundResult {
        child_age,
        years_until_college,
        annual_fee,
        cost_factor,
        future_cost,
        already_saved,
        remaining_needed,
        monthly_savings,
    }
}

/// Replacement income for the retirement years, inflated to retirement age,
/// financed by a level monthly saving at the retirement rate
fn retirement(store: &FieldStore, tables: &RateTables) -> RetirementResult {
    let current_age = store.integer_or_zero("current_age");
    let retirement_age = store.integer_or_zero("retirement_age");
    let years_until_retirement = (retirement_age - current_age).max(0) as u32;
    let monthly_income = store.number_or_zero("monthly_income");
    let years_after_retirement = store.integer_or_zero("years_after_retirement").max(0) as f64;

    let annual_retirement_income = monthly_income * 12.0 * tables.income_replacement_ratio;
    let total_needed = annual_retirement_income * years_after_retirement;
    // This multiplier is a direct power, unlike the tabled schedules
    let inflation_multiplier =
        (1.0 + tables.retirement_inflation_rate).powi(years_until_retirement as i32);
    let future_value = total_needed * inflation_multiplier;
    let monthly_savings = annuity_payment(
        future_value,
        tables.retirement_savings_rate / 12.0,
        years_until_retirement * 12,
    );

    RetirementResult {
        years_until_retirement,
        annual_retirement_income,
        total_needed,
        inflation_multiplier,
        future_value,
        monthly_savings,
    }
}

/// Today's price escalated over the saving horizon
fn savings_goal(store: &FieldStore, tables: &RateTables) -> SavingsGoalResult {
    let goal = describe_goal(store);
    let client_name = store.text("full_name").trim().to_string();
    let current_cost = store.number_or_zero("current_cost");
    let years_until_goal = store.integer_or_zero("years_until_goal").max(0) as u32;

    let inflation_factor = tables.goal_inflation.factor(years_until_goal);
    let future_amount_needed = current_cost * inflation_factor;

    SavingsGoalResult {
        goal,
        client_name,
        current_cost,
        years_until_goal,
        inflation_factor,
        future_amount_needed,
    }
}

fn describe_goal(store: &FieldStore) -> String {
    let purpose = store.text("goal_purpose").trim();
    if purpose == "Other" {
        let detail = store.text("goal_detail").trim();
        if !detail.is_empty() {
            return detail.to_string();
        }
    }
    purpose.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tables() -> RateTables {
        RateTables::standard()
    }

    #[test]
    fn test_life_protection_need() {
        let mut store = FieldStore::new();
        store.set_category("monthly_expenses", "housing", "8000");
        store.set_category("monthly_expenses", "utilities", "2000");
        store.set_category("monthly_expenses", "food", "5000");
        store.set_category("monthly_expenses", "transport", "3000");
        store.set_category("monthly_expenses", "education", "2000");
        store.set_text("support_years", "5");
        store.set_text("existing_coverage", "50000");

        let result = life_protection(&store, &tables());

        assert_eq!(result.total_monthly_expenses, 20_000.0);
        assert_eq!(result.support_factor, 5.6330);
        assert_relative_eq!(result.protection_need, 1_301_920.0, max_relative = 1e-12);
    }

    #[test]
    fn test_life_protection_clamps_at_zero() {
        let mut store = FieldStore::new();
        store.set_category("monthly_expenses", "housing", "100");
        store.set_text("support_years", "1");
        store.set_text("existing_coverage", "999999999");

        let result = life_protection(&store, &tables());
        assert_eq!(result.protection_need, 0.0);
    }

    #[test]
    fn test_life_protection_years_outside_schedule_need_nothing() {
        let mut store = FieldStore::new();
        store.set_category("monthly_expenses", "housing", "10000");
        store.set_text("support_years", "25");
        store.set_text("existing_coverage", "0");

        let result = life_protection(&store, &tables());
        assert_eq!(result.support_factor, 0.0);
        assert_eq!(result.protection_need, 0.0);
    }

    #[test]
    fn test_health_fund_two_year_goal() {
        let mut store = FieldStore::new();
        store.set_text("fund_needed", "120000");
        store.set_text("monthly_contribution", "5000");

        let result = health_fund(&store);

        assert_relative_eq!(result.years_to_goal, 2.0, max_relative = 1e-12);
        assert_eq!((result.whole_years, result.extra_months), (2, 0));
    }

    #[test]
    fn test_health_fund_zero_contribution_guard() {
        let mut store = FieldStore::new();
        store.set_text("fund_needed", "120000");
        store.set_text("monthly_contribution", "0");

        let result = health_fund(&store);
        assert_eq!(result.years_to_goal, 0.0);
    }

    #[test]
    fn test_health_fund_month_breakdown() {
        let mut store = FieldStore::new();
        store.set_text("fund_needed", "150000");
        store.set_text("monthly_contribution", "5000");

        // 150000 / 60000 = 2.5 years
        let result = health_fund(&store);
        assert_eq!((result.whole_years, result.extra_months), (2, 6));
    }

    #[test]
    fn test_education_fund_projection() {
        let mut store = FieldStore::new();
        store.set_text("child_age", "8");
        store.set_text("annual_fee", "100000");
        store.set_text("already_saved", "200000");

        let result = education_fund(&store, &tables());

        assert_eq!(result.years_until_college, 10);
        assert_eq!(result.cost_factor, 2.1589);
        assert_relative_eq!(result.future_cost, 863_560.0, max_relative = 1e-12);
        assert_relative_eq!(result.remaining_needed, 663_560.0, max_relative = 1e-12);

        // The computed saving accumulates back to the remaining need
        let forward = annuity_accumulation(result.monthly_savings, 0.05 / 12.0, 120);
        assert_relative_eq!(forward, result.remaining_needed, max_relative = 1e-9);
    }

    #[test]
    fn test_education_fund_college_age_child_needs_no_saving() {
        let mut store = FieldStore::new();
        store.set_text("child_age", "18");
        store.set_text("annual_fee", "100000");
        store.set_text("already_saved", "0");

        let result = education_fund(&store, &tables());

        assert_eq!(result.years_until_college, 0);
        assert_eq!(result.cost_factor, 1.0);
        assert_eq!(result.monthly_savings, 0.0);
    }

    #[test]
    fn test_education_fund_fully_saved_needs_nothing() {
        let mut store = FieldStore::new();
        store.set_text("child_age", "8");
        store.set_text("annual_fee", "1000");
        store.set_text("already_saved", "99999999");

        let result = education_fund(&store, &tables());
        assert_eq!(result.remaining_needed, 0.0);
        assert_eq!(result.monthly_savings, 0.0);
    }

    #[test]
    fn test_retirement_projection() {
        let mut store = FieldStore::new();
        store.set_text("current_age", "30");
        store.set_text("retirement_age", "60");
        store.set_text("monthly_income", "50000");
        store.set_text("years_after_retirement", "20");

        let result = retirement(&store, &tables());

        assert_eq!(result.years_until_retirement, 30);
        assert_relative_eq!(result.annual_retirement_income, 420_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_needed, 8_400_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.inflation_multiplier, 1.04_f64.powi(30), max_relative = 1e-12);
        assert_relative_eq!(result.future_value, 27_244_539.08, max_relative = 1e-6);
        assert!(result.monthly_savings > 0.0);

        let forward = annuity_accumulation(result.monthly_savings, 0.06 / 12.0, 360);
        assert_relative_eq!(forward, result.future_value, max_relative = 1e-9);
    }

    #[test]
    fn test_savings_goal_one_year() {
        let mut store = FieldStore::new();
        store.set_text("goal_purpose", "Vehicle");
        store.set_text("current_cost", "100000");
        store.set_text("years_until_goal", "1");

        let result = savings_goal(&store, &tables());

        assert_eq!(result.inflation_factor, 1.0400);
        assert_relative_eq!(result.future_amount_needed, 104_000.0, max_relative = 1e-12);
        assert_eq!(result.goal, "Vehicle");
    }

    #[test]
    fn test_savings_goal_beyond_schedule_compounds() {
        let mut store = FieldStore::new();
        store.set_text("goal_purpose", "Other");
        store.set_text("goal_detail", "Sailing boat");
        store.set_text("current_cost", "500000");
        store.set_text("years_until_goal", "25");

        let result = savings_goal(&store, &tables());

        assert_relative_eq!(result.inflation_factor, 1.04_f64.powi(25), max_relative = 1e-12);
        assert_eq!(result.goal, "Sailing boat");
    }

    #[test]
    fn test_compute_dispatches_by_kind() {
        let store = FieldStore::new();
        let tables = tables();

        for kind in CalculatorKind::all() {
            let record = compute(kind, &store, &tables);
            assert_eq!(record.kind(), kind);
        }
    }
}
