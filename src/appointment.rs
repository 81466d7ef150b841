//! Appointment booking intake
//!
//! A single-pass validated form rather than a stepped wizard: every field
//! is checked together, and a typed request is produced only from a clean
//! pass. Dispatch failure leaves the intake untouched so the client can
//! retry.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dispatch::{AppointmentDispatcher, DispatchError, DispatchReceipt};
use crate::intake::FieldStore;
use crate::rules::{normalize_mobile, ErrorMap, Rule, ValidationContext};

/// Purposes offered on the booking form
pub const PURPOSE_OPTIONS: &[&str] = &[
    "Life Protection",
    "Health Fund",
    "Education Fund",
    "Retirement",
    "Savings Goal",
    "Other",
];

/// Ways the meeting can be held
pub const MEETING_SETUP_OPTIONS: &[&str] = &["In Person", "Video Call", "Phone Call"];

/// Field rules for the booking form, applied in one pass
const APPOINTMENT_RULES: &[(&str, Rule)] = &[
    ("first_name", Rule::FullName),
    ("last_name", Rule::FullName),
    ("age", Rule::IntegerRange { min: 18, max: 100 }),
    ("mobile", Rule::Mobile),
    ("email", Rule::Email),
    ("date", Rule::FutureDate),
    ("time", Rule::BusinessHours),
    (
        "purpose",
        Rule::Choice {
            options: PURPOSE_OPTIONS,
            other_detail: Some("purpose_detail"),
        },
    ),
    (
        "meeting_setup",
        Rule::Choice {
            options: MEETING_SETUP_OPTIONS,
            other_detail: None,
        },
    ),
    ("notes", Rule::OptionalText),
    ("consent", Rule::Consent),
];

/// A validated booking, ready for dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Digits only, separators stripped
    pub mobile: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub purpose: String,
    pub purpose_detail: Option<String>,
    pub meeting_setup: String,
    pub notes: String,
    pub consent: bool,
}

/// A booking submission could not complete
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    /// Field validation failed; the error map carries the inline messages
    #[error("{} field(s) need attention", .0.len())]
    Validation(ErrorMap),

    /// The dispatch collaborator failed; the raw text is shown to the client
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The booking form state for one client
#[derive(Debug, Clone)]
pub struct AppointmentIntake {
    context: ValidationContext,
    fields: FieldStore,
    errors: ErrorMap,
}

impl AppointmentIntake {
    /// Start an empty intake anchored to the current date
    pub fn new() -> Self {
        Self::with_context(ValidationContext::current())
    }

    /// Start an empty intake with an explicit validation context
    pub fn with_context(context: ValidationContext) -> Self {
        Self {
            context,
            fields: FieldStore::new(),
            errors: ErrorMap::new(),
        }
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Errors from the most recent validation pass
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Record a text answer, clearing its pending error
    pub fn set_field(&mut self, name: &str, raw: &str) {
        self.fields.set_text(name, raw);
        self.errors.remove(name);
    }

    /// Record the consent toggle, clearing its pending error
    pub fn set_consent(&mut self, granted: bool) {
        self.fields.set_flag("consent", granted);
        self.errors.remove("consent");
    }

    /// Re-derive the whole error map from the current answers
    pub fn validate(&mut self) -> &ErrorMap {
        let mut errors = ErrorMap::new();
        for (field, rule) in APPOINTMENT_RULES {
            rule.apply(field, &self.fields, &self.context, &mut errors);
        }
        self.errors = errors;
        &self.errors
    }

    /// Build the typed request; None unless the current answers are clean
    pub fn to_request(&self) -> Option<AppointmentRequest> {
        let mut errors = ErrorMap::new();
        for (field, rule) in APPOINTMENT_RULES {
            rule.apply(field, &self.fields, &self.context, &mut errors);
        }
        if !errors.is_empty() {
            return None;
        }

        let purpose = self.fields.text("purpose").trim().to_string();
        let purpose_detail = if purpose == "Other" {
            Some(self.fields.text("purpose_detail").trim().to_string())
        } else {
            None
        };

        Some(AppointmentRequest {
            first_name: self.fields.text("first_name").trim().to_string(),
            last_name: self.fields.text("last_name").trim().to_string(),
            age: self.fields.integer_or_zero("age").max(0) as u32,
            mobile: normalize_mobile(self.fields.text("mobile")),
            email: self.fields.text("email").trim().to_string(),
            date: NaiveDate::parse_from_str(self.fields.text("date").trim(), "%Y-%m-%d").ok()?,
            time: NaiveTime::parse_from_str(self.fields.text("time").trim(), "%H:%M").ok()?,
            purpose,
            purpose_detail,
            meeting_setup: self.fields.text("meeting_setup").trim().to_string(),
            notes: self.fields.text("notes").trim().to_string(),
            consent: self.fields.flag("consent"),
        })
    }

    /// Validate, then hand the request to the dispatcher
    ///
    /// A validation failure returns the error map; a dispatch failure
    /// returns the collaborator's raw error. Either way the intake itself
    /// is unchanged and the client may correct and retry.
    pub fn submit(
        &mut self,
        dispatcher: &dyn AppointmentDispatcher,
    ) -> Result<DispatchReceipt, SubmitError> {
        self.validate();
        if !self.errors.is_empty() {
            return Err(SubmitError::Validation(self.errors.clone()));
        }
        let request = self
            .to_request()
            .ok_or_else(|| SubmitError::Validation(self.errors.clone()))?;
        Ok(dispatcher.dispatch(&request)?)
    }
}

impl Default for AppointmentIntake {
    fn default() -> Self {
        Self::new()
    }
}
