//! Raw form value storage for a single intake session
//!
//! The store keeps what the client typed, keyed by field name. Coercion to
//! numbers happens at validation and computation time, never at write time,
//! so a half-typed value is always representable.

use std::collections::BTreeMap;

/// A raw value held for one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text as typed (also used for numeric and choice fields)
    Text(String),

    /// A yes/no toggle such as a consent checkbox
    Flag(bool),

    /// A sub-mapping from category name to numeric text, stored as one field
    Breakdown(BTreeMap<String, String>),
}

/// Current raw values for an intake session, keyed by field name
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    values: BTreeMap<String, FieldValue>,
}

impl FieldStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value for one field
    pub fn set(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field.to_string(), value);
    }

    /// Replace the value for one text-backed field
    pub fn set_text(&mut self, field: &str, raw: impl Into<String>) {
        self.set(field, FieldValue::Text(raw.into()));
    }

    /// Replace the value for one flag field
    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.set(field, FieldValue::Flag(value));
    }

    /// Replace one category inside a breakdown field
    ///
    /// The enclosing breakdown is created on first write. Other categories
    /// are left untouched; only the named entry is replaced.
    pub fn set_category(&mut self, field: &str, category: &str, raw: impl Into<String>) {
        let entry = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| FieldValue::Breakdown(BTreeMap::new()));

        if let FieldValue::Breakdown(categories) = entry {
            categories.insert(category.to_string(), raw.into());
        } else {
            let mut categories = BTreeMap::new();
            categories.insert(category.to_string(), raw.into());
            *entry = FieldValue::Breakdown(categories);
        }
    }

    /// Get the raw text for a field, or "" when absent or not text-backed
    pub fn text(&self, field: &str) -> &str {
        match self.values.get(field) {
            Some(FieldValue::Text(raw)) => raw,
            _ => "",
        }
    }

    /// Get a flag field, defaulting to false
    pub fn flag(&self, field: &str) -> bool {
        matches!(self.values.get(field), Some(FieldValue::Flag(true)))
    }

    /// Get the category map of a breakdown field, if present
    pub fn breakdown(&self, field: &str) -> Option<&BTreeMap<String, String>> {
        match self.values.get(field) {
            Some(FieldValue::Breakdown(categories)) => Some(categories),
            _ => None,
        }
    }

    /// Get the raw text of one breakdown category, or "" when absent
    pub fn category_text(&self, field: &str, category: &str) -> &str {
        self.breakdown(field)
            .and_then(|categories| categories.get(category))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Parse a field as a number; None when blank or unparseable
    pub fn number(&self, field: &str) -> Option<f64> {
        parse_number(self.text(field))
    }

    /// Parse a field as an integer; None when blank or unparseable
    pub fn integer(&self, field: &str) -> Option<i64> {
        self.text(field).trim().parse().ok()
    }

    /// Parse a field as a number, defaulting to 0.0
    pub fn number_or_zero(&self, field: &str) -> f64 {
        self.number(field).unwrap_or(0.0)
    }

    /// Parse a field as an integer, defaulting to 0
    pub fn integer_or_zero(&self, field: &str) -> i64 {
        self.integer(field).unwrap_or(0)
    }

    /// Parse one breakdown category as a number; None when blank or unparseable
    pub fn category_number(&self, field: &str, category: &str) -> Option<f64> {
        parse_number(self.category_text(field, category))
    }

    /// Sum all parseable categories of a breakdown field
    pub fn breakdown_total(&self, field: &str) -> f64 {
        self.breakdown(field)
            .map(|categories| {
                categories
                    .values()
                    .filter_map(|raw| parse_number(raw))
                    .sum()
            })
            .unwrap_or(0.0)
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok().filter(|value: &f64| value.is_finite())
}

/// Maximum digits kept for a large currency amount
pub const CURRENCY_DIGIT_LIMIT: usize = 9;

/// Reduce a decorated currency entry to its canonical digit string
///
/// Grouping separators, currency signs, and any other decoration are
/// dropped; at most [`CURRENCY_DIGIT_LIMIT`] digits are kept. The canonical
/// value is what the store holds; grouping for display is applied on read.
pub fn currency_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CURRENCY_DIGIT_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_whole_value() {
        let mut store = FieldStore::new();
        store.set_text("monthly_income", "50000");
        store.set_text("monthly_income", "60000");

        assert_eq!(store.text("monthly_income"), "60000");
        assert_eq!(store.number("monthly_income"), Some(60000.0));
    }

    #[test]
    fn test_missing_field_reads_as_empty() {
        let store = FieldStore::new();

        assert_eq!(store.text("anything"), "");
        assert_eq!(store.number("anything"), None);
        assert_eq!(store.number_or_zero("anything"), 0.0);
        assert!(!store.flag("anything"));
    }

    #[test]
    fn test_breakdown_categories_are_independent() {
        let mut store = FieldStore::new();
        store.set_category("monthly_expenses", "housing", "12000");
        store.set_category("monthly_expenses", "food", "6000");
        store.set_category("monthly_expenses", "housing", "15000");

        assert_eq!(store.category_text("monthly_expenses", "housing"), "15000");
        assert_eq!(store.category_text("monthly_expenses", "food"), "6000");
        assert_eq!(store.breakdown_total("monthly_expenses"), 21000.0);
    }

    #[test]
    fn test_breakdown_total_skips_unparseable_entries() {
        let mut store = FieldStore::new();
        store.set_category("monthly_expenses", "housing", "12000");
        store.set_category("monthly_expenses", "food", "abc");
        store.set_category("monthly_expenses", "transport", "");

        assert_eq!(store.breakdown_total("monthly_expenses"), 12000.0);
    }

    #[test]
    fn test_currency_digits_strips_decoration() {
        assert_eq!(currency_digits("1,250,000"), "1250000");
        assert_eq!(currency_digits("$ 98 000"), "98000");
        assert_eq!(currency_digits(""), "");
        // Past nine digits the entry is truncated, not rejected
        assert_eq!(currency_digits("12345678901"), "123456789");
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let mut store = FieldStore::new();
        store.set_text("amount", "inf");

        assert_eq!(store.number("amount"), None);
    }
}
