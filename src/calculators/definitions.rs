//! Static wizard definitions for the five planning calculators
//!
//! One generic engine consumes these definitions; the per-calculator
//! differences (step count, fields, rules, validation scope) live here as
//! data rather than as five copies of the flow.

use crate::rules::Rule;

/// The five client-facing planning calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CalculatorKind {
    LifeProtection,
    HealthFund,
    EducationFund,
    Retirement,
    SavingsGoal,
}

impl CalculatorKind {
    /// All calculators in presentation order
    pub fn all() -> [CalculatorKind; 5] {
        [
            CalculatorKind::LifeProtection,
            CalculatorKind::HealthFund,
            CalculatorKind::EducationFund,
            CalculatorKind::Retirement,
            CalculatorKind::SavingsGoal,
        ]
    }

    /// Human-readable calculator title
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::LifeProtection => "Life Protection",
            CalculatorKind::HealthFund => "Health Fund",
            CalculatorKind::EducationFund => "Education Fund",
            CalculatorKind::Retirement => "Retirement",
            CalculatorKind::SavingsGoal => "Savings Goal",
        }
    }

    /// Wizard definition for this calculator
    pub fn definition(&self) -> &'static CalculatorDefinition {
        match self {
            CalculatorKind::LifeProtection => &LIFE_PROTECTION,
            CalculatorKind::HealthFund => &HEALTH_FUND,
            CalculatorKind::EducationFund => &EDUCATION_FUND,
            CalculatorKind::Retirement => &RETIREMENT,
            CalculatorKind::SavingsGoal => &SAVINGS_GOAL,
        }
    }
}

/// How a field's raw entry is treated by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text stored as typed
    Text,
    /// Large currency amount stored as an undecorated digit string
    Currency,
    /// Decimal amount stored as typed
    Number,
    /// Whole number stored as typed
    Integer,
    /// One option of an enumerated set
    Choice,
    /// Yes/no toggle
    Flag,
    /// Calendar date, YYYY-MM-DD
    Date,
    /// Time of day, HH:MM
    Time,
    /// Sub-mapping of category name to amount text
    Breakdown,
}

/// One question in a wizard flow
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Step the field is introduced at (1-indexed)
    pub step: u8,
    pub rules: &'static [Rule],
}

/// Which fields a step validation pass inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepScope {
    /// Validating step K checks fields introduced at or before K
    Cumulative,
    /// Validating step K checks exactly the fields introduced at K
    CurrentOnly,
}

/// Static description of one calculator's wizard flow
#[derive(Debug)]
pub struct CalculatorDefinition {
    pub kind: CalculatorKind,
    /// Number of steps; the final step is the review step
    pub steps: u8,
    pub scope: StepScope,
    pub fields: &'static [FieldSpec],
}

impl CalculatorDefinition {
    /// Fields inspected when validating `step`, honoring this flow's scope
    pub fn fields_for_step(&self, step: u8) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        let scope = self.scope;
        self.fields.iter().filter(move |spec| match scope {
            StepScope::Cumulative => spec.step <= step,
            StepScope::CurrentOnly => spec.step == step,
        })
    }

    /// Look up a field spec by name
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

/// Expense categories itemized by the life protection flow
pub const EXPENSE_CATEGORIES: &[&str] = &["housing", "utilities", "food", "transport", "education"];

/// Purposes offered by the savings goal flow
pub const GOAL_OPTIONS: &[&str] = &[
    "New Home",
    "Vehicle",
    "Wedding",
    "Travel",
    "Business",
    "Other",
];

static LIFE_PROTECTION: CalculatorDefinition = CalculatorDefinition {
    kind: CalculatorKind::LifeProtection,
    steps: 3,
    scope: StepScope::Cumulative,
    fields: &[
        FieldSpec {
            name: "monthly_expenses",
            label: "Monthly household expenses",
            kind: FieldKind::Breakdown,
            step: 1,
            rules: &[Rule::Breakdown {
                categories: EXPENSE_CATEGORIES,
            }],
        },
        FieldSpec {
            name: "support_years",
            label: "Years of family support",
            kind: FieldKind::Integer,
            step: 2,
            rules: &[Rule::IntegerRange { min: 1, max: 20 }],
        },
        FieldSpec {
            name: "existing_coverage",
            label: "Existing life coverage",
            kind: FieldKind::Currency,
            step: 2,
            rules: &[Rule::NonNegativeNumber],
        },
    ],
};

static HEALTH_FUND: CalculatorDefinition = CalculatorDefinition {
    kind: CalculatorKind::HealthFund,
    steps: 3,
    scope: StepScope::CurrentOnly,
    fields: &[
        FieldSpec {
            name: "fund_needed",
            label: "Health fund target",
            kind: FieldKind::Currency,
            step: 1,
            rules: &[Rule::PositiveNumber],
        },
        FieldSpec {
            name: "monthly_contribution",
            label: "Monthly contribution",
            kind: FieldKind::Currency,
            step: 2,
            rules: &[Rule::NonNegativeNumber],
        },
    ],
};

static EDUCATION_FUND: CalculatorDefinition = CalculatorDefinition {
    kind: CalculatorKind::EducationFund,
    steps: 3,
    scope: StepScope::CurrentOnly,
    fields: &[
        FieldSpec {
            name: "child_age",
            label: "Child's age",
            kind: FieldKind::Integer,
            step: 1,
            rules: &[Rule::IntegerRange { min: 0, max: 17 }],
        },
        FieldSpec {
            name: "annual_fee",
            label: "Annual college fee today",
            kind: FieldKind::Currency,
            step: 2,
            rules: &[Rule::PositiveNumber],
        },
        FieldSpec {
            name: "already_saved",
            label: "Amount already saved",
            kind: FieldKind::Currency,
            step: 2,
            rules: &[Rule::NonNegativeNumber],
        },
    ],
};

static RETIREMENT: CalculatorDefinition = CalculatorDefinition {
    kind: CalculatorKind::Retirement,
    steps: 4,
    scope: StepScope::Cumulative,
    fields: &[
        FieldSpec {
            name: "current_age",
            label: "Current age",
            kind: FieldKind::Integer,
            step: 1,
            rules: &[Rule::IntegerRange { min: 18, max: 80 }],
        },
        FieldSpec {
            name: "retirement_age",
            label: "Planned retirement age",
            kind: FieldKind::Integer,
            step: 1,
            rules: &[
                Rule::IntegerRange { min: 30, max: 100 },
                Rule::GreaterThanField {
                    other: "current_age",
                    message: "Retirement age must be greater than current age",
                },
            ],
        },
        FieldSpec {
            name: "monthly_income",
            label: "Current monthly income",
            kind: FieldKind::Currency,
            step: 2,
            rules: &[Rule::PositiveNumber],
        },
        FieldSpec {
            name: "years_after_retirement",
            label: "Years of retirement income",
            kind: FieldKind::Integer,
            step: 3,
            rules: &[Rule::IntegerRange { min: 1, max: 50 }],
        },
    ],
};

static SAVINGS_GOAL: CalculatorDefinition = CalculatorDefinition {
    kind: CalculatorKind::SavingsGoal,
    steps: 5,
    scope: StepScope::CurrentOnly,
    fields: &[
        FieldSpec {
            name: "goal_purpose",
            label: "What are you saving for?",
            kind: FieldKind::Choice,
            step: 1,
            rules: &[Rule::Choice {
                options: GOAL_OPTIONS,
                other_detail: Some("goal_detail"),
            }],
        },
        FieldSpec {
            name: "goal_detail",
            label: "Tell us about your goal",
            kind: FieldKind::Text,
            step: 1,
            rules: &[Rule::OptionalText],
        },
        FieldSpec {
            name: "current_cost",
            label: "What it costs today",
            kind: FieldKind::Currency,
            step: 2,
            rules: &[Rule::PositiveNumber],
        },
        FieldSpec {
            name: "years_until_goal",
            label: "Years until the purchase",
            kind: FieldKind::Integer,
            step: 3,
            rules: &[Rule::IntegerRange { min: 1, max: 40 }],
        },
        FieldSpec {
            name: "full_name",
            label: "Your name",
            kind: FieldKind::Text,
            step: 4,
            rules: &[Rule::FullName],
        },
        FieldSpec {
            name: "email",
            label: "Email address",
            kind: FieldKind::Text,
            step: 4,
            rules: &[Rule::Email],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts() {
        assert_eq!(CalculatorKind::LifeProtection.definition().steps, 3);
        assert_eq!(CalculatorKind::HealthFund.definition().steps, 3);
        assert_eq!(CalculatorKind::EducationFund.definition().steps, 3);
        assert_eq!(CalculatorKind::Retirement.definition().steps, 4);
        assert_eq!(CalculatorKind::SavingsGoal.definition().steps, 5);
    }

    #[test]
    fn test_cumulative_scope_accumulates_fields() {
        let definition = CalculatorKind::Retirement.definition();

        let step1: Vec<_> = definition.fields_for_step(1).map(|f| f.name).collect();
        assert_eq!(step1, vec!["current_age", "retirement_age"]);

        let step3: Vec<_> = definition.fields_for_step(3).map(|f| f.name).collect();
        assert_eq!(
            step3,
            vec![
                "current_age",
                "retirement_age",
                "monthly_income",
                "years_after_retirement"
            ]
        );
    }

    #[test]
    fn test_current_only_scope_isolates_steps() {
        let definition = CalculatorKind::HealthFund.definition();

        let step2: Vec<_> = definition.fields_for_step(2).map(|f| f.name).collect();
        assert_eq!(step2, vec!["monthly_contribution"]);

        // The review step introduces no fields of its own
        assert_eq!(definition.fields_for_step(3).count(), 0);
    }

    #[test]
    fn test_field_lookup() {
        let definition = CalculatorKind::SavingsGoal.definition();

        assert!(definition.field("goal_purpose").is_some());
        assert!(definition.field("unknown").is_none());
    }
}
