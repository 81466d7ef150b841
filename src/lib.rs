//! Advisory System - client intake and financial planning calculator engine
//!
//! This library provides:
//! - A step-gated wizard engine shared by five planning calculators
//! - Pure result calculators with literal growth factor schedules
//! - Field validation rules for forms and the appointment intake
//! - Appointment booking with an external dispatch collaborator
//! - Result document export and batch runs over an advisor book

pub mod appointment;
pub mod calculators;
pub mod dispatch;
pub mod export;
pub mod intake;
pub mod rules;
pub mod runner;
pub mod tables;
pub mod wizard;

// Re-export commonly used types
pub use appointment::{AppointmentIntake, AppointmentRequest};
pub use calculators::{CalculatorKind, ResultRecord};
pub use intake::{ClientProfile, FieldStore, FieldValue};
pub use rules::{ErrorMap, ValidationContext};
pub use runner::{ClientResults, SessionRunner};
pub use tables::{GrowthTable, RateTables};
pub use wizard::{WizardPhase, WizardSession};
