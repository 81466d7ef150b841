//! Planning rate schedules used by the result calculators

mod growth;

pub use growth::{Fallback, GrowthTable};

/// Container for all calculator rate inputs
#[derive(Debug, Clone)]
pub struct RateTables {
    /// Cumulative expense inflation factors for life protection (years 1-20)
    pub expense_support: GrowthTable,

    /// College cost escalation factors (years 0-20)
    pub college_cost: GrowthTable,

    /// Goal price inflation factors (years 1-20)
    pub goal_inflation: GrowthTable,

    /// Annual return assumed on education savings, compounded monthly
    pub education_savings_rate: f64,

    /// Annual return assumed on retirement savings, compounded monthly
    pub retirement_savings_rate: f64,

    /// Annual inflation applied to retirement income needs as a direct power
    pub retirement_inflation_rate: f64,

    /// Income replacement ratio applied to pre-retirement income
    pub income_replacement_ratio: f64,
}

impl RateTables {
    /// Create the standard planning assumptions
    pub fn standard() -> Self {
        Self {
            expense_support: GrowthTable::expense_support(),
            college_cost: GrowthTable::college_cost(),
            goal_inflation: GrowthTable::goal_inflation(),
            education_savings_rate: 0.05,
            retirement_savings_rate: 0.06,
            retirement_inflation_rate: 0.04,
            income_replacement_ratio: 0.70,
        }
    }
}

impl Default for RateTables {
    fn default() -> Self {
        Self::standard()
    }
}
