//! Growth factor tables used by the planning calculators
//!
//! Each table is a published schedule of compounding factors keyed by an
//! integer year count. The factors are stored verbatim to 4 decimal places;
//! lookups return the literal schedule value, never a freshly computed power.
//! Out-of-range years follow the table's configured fallback.

/// Behavior for year counts outside the table range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// Out-of-range years contribute no growth factor at all
    Zero,
    /// Out-of-range years fall back to (1 + rate)^years
    Compound(f64),
}

/// A literal factor schedule keyed by integer years
#[derive(Debug, Clone)]
pub struct GrowthTable {
    /// First year covered by the schedule (0 or 1 depending on the table)
    first_year: u32,

    /// Factors for consecutive years starting at `first_year`
    factors: Vec<f64>,

    /// Behavior for years outside [first_year, last covered year]
    fallback: Fallback,
}

impl GrowthTable {
    /// Create a table from an explicit schedule
    pub fn new(first_year: u32, factors: Vec<f64>, fallback: Fallback) -> Self {
        Self {
            first_year,
            factors,
            fallback,
        }
    }

    /// Last year covered by the schedule
    pub fn last_year(&self) -> u32 {
        self.first_year + self.factors.len().saturating_sub(1) as u32
    }

    /// Whether a year count is covered by the literal schedule
    pub fn covers(&self, years: u32) -> bool {
        years >= self.first_year && years <= self.last_year()
    }

    /// Get the growth factor for a year count
    ///
    /// In-range years return the literal schedule value. Out-of-range years
    /// return 0.0 or (1 + rate)^years depending on the table's fallback.
    pub fn factor(&self, years: u32) -> f64 {
        if self.covers(years) {
            let idx = (years - self.first_year) as usize;
            self.factors[idx]
        } else {
            match self.fallback {
                Fallback::Zero => 0.0,
                Fallback::Compound(rate) => (1.0 + rate).powi(years as i32),
            }
        }
    }

    /// Cumulative 4%-inflation expense support schedule, years 1-20
    ///
    /// factor(n) is the published cumulative sum of 1.04^k for k = 1..n, so
    /// multiplying one year of expenses by factor(n) yields the inflated cost
    /// of supporting a household for n years. Years outside 1-20 contribute
    /// nothing (Fallback::Zero).
    pub fn expense_support() -> Self {
        Self::new(
            1,
            vec![
                // Years 1-5
                1.0400, 2.1216, 3.2465, 4.4163, 5.6330,
                // Years 6-10
                6.8983, 8.2142, 9.5828, 11.0061, 12.4864,
                // Years 11-15
                14.0258, 15.6268, 17.2919, 19.0236, 20.8245,
                // Years 16-20
                22.6975, 24.6454, 26.6712, 28.7781, 30.9692,
            ],
            Fallback::Zero,
        )
    }

    /// College cost escalation schedule, years 0-20, 8%-class compounding
    ///
    /// factor(0) is 1.0000 (college starts now). Years beyond the schedule
    /// fall back to 1.08^years.
    pub fn college_cost() -> Self {
        Self::new(
            0,
            vec![
                // Years 0-4
                1.0000, 1.0800, 1.1664, 1.2597, 1.3605,
                // Years 5-9
                1.4693, 1.5869, 1.7138, 1.8509, 1.9990,
                // Years 10-14
                2.1589, 2.3316, 2.5182, 2.7196, 2.9372,
                // Years 15-20
                3.1722, 3.4259, 3.7000, 3.9960, 4.3157, 4.6610,
            ],
            Fallback::Compound(0.08),
        )
    }

    /// Goal price inflation schedule, years 1-20, 4% compounding
    ///
    /// The schedule holds the published 4-decimal roundings of 1.04^n; they
    /// are close to, but not algebraically identical with, the expense
    /// support schedule and are kept as distinct literal data. Years beyond
    /// the schedule fall back to 1.04^years.
    pub fn goal_inflation() -> Self {
        Self::new(
            1,
            vec![
                // Years 1-5
                1.0400, 1.0816, 1.1249, 1.1699, 1.2167,
                // Years 6-10
                1.2653, 1.3159, 1.3686, 1.4233, 1.4802,
                // Years 11-15
                1.5395, 1.6010, 1.6651, 1.7317, 1.8009,
                // Years 16-20
                1.8730, 1.9479, 2.0258, 2.1068, 2.1911,
            ],
            Fallback::Compound(0.04),
        )
    }
}
