//! A single calculator session walking a client through the wizard steps

use log::debug;

use crate::calculators::{self, CalculatorDefinition, CalculatorKind, FieldKind, ResultRecord};
use crate::intake::{currency_digits, FieldStore};
use crate::rules::{ErrorMap, ValidationContext};
use crate::tables::RateTables;

/// Where a session currently stands
///
/// A submitted session is a distinct variant, not a flag on a step, so a
/// half-submitted state cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// Collecting answers for step n (1-indexed)
    Step(u8),
    /// Past the final step; the result is derivable and the review stays
    /// editable
    Submitted,
}

/// One client's pass through one calculator
///
/// The session owns its field store for its whole lifetime; nothing is
/// shared across sessions.
#[derive(Debug, Clone)]
pub struct WizardSession {
    definition: &'static CalculatorDefinition,
    tables: RateTables,
    context: ValidationContext,
    fields: FieldStore,
    errors: ErrorMap,
    phase: WizardPhase,
}

impl WizardSession {
    /// Start a session with the standard tables and the current date
    pub fn new(kind: CalculatorKind) -> Self {
        Self::with_parts(kind, RateTables::standard(), ValidationContext::current())
    }

    /// Start a session with explicit tables and validation context
    pub fn with_parts(
        kind: CalculatorKind,
        tables: RateTables,
        context: ValidationContext,
    ) -> Self {
        Self {
            definition: kind.definition(),
            tables,
            context,
            fields: FieldStore::new(),
            errors: ErrorMap::new(),
            phase: WizardPhase::Step(1),
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        self.definition.kind
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// The step whose questions are on screen; the final step for a
    /// submitted session
    pub fn current_step(&self) -> u8 {
        match self.phase {
            WizardPhase::Step(step) => step,
            WizardPhase::Submitted => self.definition.steps,
        }
    }

    /// Errors from the most recent blocked advance
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Record a text-backed answer
    ///
    /// Currency fields are reduced to their canonical digit string before
    /// storage. Writing a field clears its pending error; errors are
    /// re-derived on the next validation pass, never accumulated.
    pub fn set_field(&mut self, name: &str, raw: &str) {
        let canonical = match self.definition.field(name).map(|spec| spec.kind) {
            Some(FieldKind::Currency) => currency_digits(raw),
            _ => raw.to_string(),
        };
        self.fields.set_text(name, canonical);
        self.errors.remove(name);
    }

    /// Record a consent-style answer
    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.fields.set_flag(name, value);
        self.errors.remove(name);
    }

    /// Record one category of a breakdown answer
    pub fn set_category(&mut self, name: &str, category: &str, raw: &str) {
        self.fields.set_category(name, category, raw);
        self.errors.remove(&format!("{}.{}", name, category));
    }

    /// Validate one step against the current answers
    ///
    /// Pure with respect to the session: the stored error map is untouched.
    pub fn validate_step(&self, step: u8) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for spec in self.definition.fields_for_step(step) {
            for rule in spec.rules {
                rule.apply(spec.name, &self.fields, &self.context, &mut errors);
            }
        }
        errors
    }

    /// Try to advance past the current step
    ///
    /// A clean validation pass moves to the next step, or to `Submitted`
    /// from the final step. A failed pass changes nothing except the stored
    /// error map, which the caller renders inline. Returns whether the
    /// session advanced.
    pub fn next(&mut self) -> bool {
        let step = match self.phase {
            WizardPhase::Step(step) => step,
            WizardPhase::Submitted => return false,
        };

        let errors = self.validate_step(step);
        if !errors.is_empty() {
            debug!(
                "{} step {} blocked by {} field error(s)",
                self.definition.kind.title(),
                step,
                errors.len()
            );
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        if step >= self.definition.steps {
            debug!("{} submitted", self.definition.kind.title());
            self.phase = WizardPhase::Submitted;
        } else {
            self.phase = WizardPhase::Step(step + 1);
        }
        true
    }

    /// Step back one step; never validates, never fails
    ///
    /// A submitted session returns to the final step; step 1 stays put.
    pub fn back(&mut self) {
        self.phase = match self.phase {
            WizardPhase::Submitted => WizardPhase::Step(self.definition.steps),
            WizardPhase::Step(step) if step > 1 => WizardPhase::Step(step - 1),
            WizardPhase::Step(_) => WizardPhase::Step(1),
        };
    }

    /// The derived result of a submitted session
    ///
    /// Re-derived from the field store on every call, so edits made on the
    /// review screen are reflected immediately; a record is never patched
    /// in place.
    pub fn result(&self) -> Option<ResultRecord> {
        match self.phase {
            WizardPhase::Submitted => Some(calculators::compute(
                self.definition.kind,
                &self.fields,
                &self.tables,
            )),
            WizardPhase::Step(_) => None,
        }
    }
}
