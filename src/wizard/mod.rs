//! Step-gated wizard engine shared by all calculators

mod session;

pub use session::{WizardPhase, WizardSession};
