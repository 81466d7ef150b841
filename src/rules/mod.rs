//! Field validation rules shared by the calculator wizards and the
//! appointment intake
//!
//! Rules are pure and total: evaluating one never fails, it only records
//! messages. The whole error map is recomputed on each validation pass so a
//! stale entry cannot survive an edit.

mod patterns;

pub use patterns::{normalize_mobile, Patterns};

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveTime};

use crate::intake::FieldStore;

/// Per-field error messages from one validation pass
pub type ErrorMap = BTreeMap<String, String>;

/// Business-day booking window, inclusive on both ends
pub const OPENING_TIME: &str = "08:00";
pub const CLOSING_TIME: &str = "17:00";

/// Reference data for rule evaluation
///
/// Holding the reference date here keeps date rules deterministic under
/// test; production sessions use the device-local current date.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    pub today: NaiveDate,
    patterns: Patterns,
}

impl ValidationContext {
    /// Context anchored to the device-local current date
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Context anchored to an explicit date
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            today,
            patterns: Patterns::compile(),
        }
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }
}

/// A validation rule attached to one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Blank, non-numeric, or <= 0 fails
    PositiveNumber,

    /// Blank, non-numeric, or < 0 fails
    NonNegativeNumber,

    /// Blank, non-integer, or outside the inclusive bounds fails
    IntegerRange { min: i64, max: i64 },

    /// Fails when this integer field is not strictly greater than another
    ///
    /// Evaluated independently of each field's own range rule; when either
    /// side is missing the range rules carry the error instead.
    GreaterThanField {
        other: &'static str,
        message: &'static str,
    },

    /// One option of an enumerated set must be chosen; choosing "Other"
    /// makes the named detail field required
    Choice {
        options: &'static [&'static str],
        other_detail: Option<&'static str>,
    },

    /// Blank or not matching the person-name pattern fails
    FullName,

    /// Blank or not matching the email pattern fails
    Email,

    /// Blank or not 10-15 digits after stripping separators fails
    Mobile,

    /// A consent flag that must be set
    Consent,

    /// Blank, unparseable, or earlier than the context date fails
    FutureDate,

    /// Blank, unparseable, or outside business hours fails
    BusinessHours,

    /// Every category of a breakdown field must be a non-negative number;
    /// each category is checked independently
    Breakdown { categories: &'static [&'static str] },

    /// Free text that is never required
    OptionalText,
}

impl Rule {
    /// Evaluate this rule for `field`, recording messages into `errors`
    pub fn apply(
        &self,
        field: &str,
        store: &FieldStore,
        context: &ValidationContext,
        errors: &mut ErrorMap,
    ) {
        match self {
            Rule::PositiveNumber => {
                if let Some(message) = check_number(store, field, 0.0, false) {
                    errors.insert(field.to_string(), message);
                }
            }
            Rule::NonNegativeNumber => {
                if let Some(message) = check_number(store, field, 0.0, true) {
                    errors.insert(field.to_string(), message);
                }
            }
            Rule::IntegerRange { min, max } => {
                let message = match store.integer(field) {
                    None if store.text(field).trim().is_empty() => {
                        Some("This field is required".to_string())
                    }
                    None => Some("Enter a whole number".to_string()),
                    Some(value) if value < *min || value > *max => {
                        Some(format!("Enter a whole number between {} and {}", min, max))
                    }
                    Some(_) => None,
                };
                if let Some(message) = message {
                    errors.insert(field.to_string(), message);
                }
            }
            Rule::GreaterThanField { other, message } => {
                if let (Some(own), Some(theirs)) = (store.integer(field), store.integer(other)) {
                    if own <= theirs {
                        errors.insert(field.to_string(), (*message).to_string());
                    }
                }
            }
            Rule::Choice {
                options,
                other_detail,
            } => {
                let chosen = store.text(field).trim();
                if chosen.is_empty() || !options.contains(&chosen) {
                    errors.insert(field.to_string(), "Please choose an option".to_string());
                } else if chosen == "Other" {
                    if let Some(detail_field) = other_detail {
                        if store.text(detail_field).trim().is_empty() {
                            errors.insert(
                                detail_field.to_string(),
                                "Please provide details".to_string(),
                            );
                        }
                    }
                }
            }
            Rule::FullName => {
                let raw = store.text(field);
                if raw.trim().is_empty() {
                    errors.insert(field.to_string(), "This field is required".to_string());
                } else if !context.patterns().is_full_name(raw) {
                    errors.insert(field.to_string(), "Enter a valid name".to_string());
                }
            }
            Rule::Email => {
                let raw = store.text(field);
                if raw.trim().is_empty() {
                    errors.insert(field.to_string(), "This field is required".to_string());
                } else if !context.patterns().is_email(raw) {
                    errors.insert(field.to_string(), "Enter a valid email address".to_string());
                }
            }
            Rule::Mobile => {
                let raw = store.text(field);
                if raw.trim().is_empty() {
                    errors.insert(field.to_string(), "This field is required".to_string());
                } else if !context.patterns().is_mobile(raw) {
                    errors.insert(
                        field.to_string(),
                        "Enter a valid mobile number (10-15 digits)".to_string(),
                    );
                }
            }
            Rule::Consent => {
                if !store.flag(field) {
                    errors.insert(
                        field.to_string(),
                        "Consent is required to proceed".to_string(),
                    );
                }
            }
            Rule::FutureDate => {
                let raw = store.text(field);
                let message = if raw.trim().is_empty() {
                    Some("This field is required".to_string())
                } else {
                    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                        Err(_) => Some("Enter a valid date (YYYY-MM-DD)".to_string()),
                        Ok(date) if date < context.today => {
                            Some("The date must not be in the past".to_string())
                        }
                        Ok(_) => None,
                    }
                };
                if let Some(message) = message {
                    errors.insert(field.to_string(), message);
                }
            }
            Rule::BusinessHours => {
                let raw = store.text(field);
                let message = if raw.trim().is_empty() {
                    Some("This field is required".to_string())
                } else {
                    match NaiveTime::parse_from_str(raw.trim(), "%H:%M") {
                        Err(_) => Some("Enter a valid time (HH:MM)".to_string()),
                        Ok(time) if !within_business_hours(time) => Some(format!(
                            "Choose a time between {} and {}",
                            OPENING_TIME, CLOSING_TIME
                        )),
                        Ok(_) => None,
                    }
                };
                if let Some(message) = message {
                    errors.insert(field.to_string(), message);
                }
            }
            Rule::Breakdown { categories } => {
                for category in *categories {
                    let raw = store.category_text(field, category);
                    let message = if raw.trim().is_empty() {
                        Some("This field is required".to_string())
                    } else {
                        match store.category_number(field, category) {
                            None => Some("Enter a valid amount".to_string()),
                            Some(value) if value < 0.0 => {
                                Some("The amount cannot be negative".to_string())
                            }
                            Some(_) => None,
                        }
                    };
                    if let Some(message) = message {
                        errors.insert(format!("{}.{}", field, category), message);
                    }
                }
            }
            Rule::OptionalText => {}
        }
    }
}

fn within_business_hours(time: NaiveTime) -> bool {
    let opening = NaiveTime::parse_from_str(OPENING_TIME, "%H:%M").expect("valid opening time");
    let closing = NaiveTime::parse_from_str(CLOSING_TIME, "%H:%M").expect("valid closing time");
    time >= opening && time <= closing
}

fn check_number(store: &FieldStore, field: &str, floor: f64, inclusive: bool) -> Option<String> {
    match store.number(field) {
        None if store.text(field).trim().is_empty() => Some("This field is required".to_string()),
        None => Some("Enter a valid amount".to_string()),
        Some(value) => {
            let acceptable = if inclusive {
                value >= floor
            } else {
                value > floor
            };
            if acceptable {
                None
            } else if inclusive {
                Some("The amount cannot be negative".to_string())
            } else {
                Some("Enter an amount greater than zero".to_string())
            }
        }
    }
}
