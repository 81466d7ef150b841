//! Result document seam and display formatting
//!
//! Calculators keep full precision internally; the two-decimal currency
//! rounding and thousands grouping here are applied only when a record is
//! turned into a document for the client. The renderer trait is the
//! boundary to whatever produces the downloadable file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::calculators::ResultRecord;

/// A result document could not be produced
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write result document: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat, display-ready rendering of one result record
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDocument {
    /// Output file name without extension, e.g. "Retirement-Result"
    pub file_basename: &'static str,
    pub title: &'static str,
    /// Ordered (label, formatted value) lines
    pub lines: Vec<(String, String)>,
}

impl ResultDocument {
    /// Build the display document for a record
    pub fn from_record(record: &ResultRecord) -> Self {
        let mut lines = Vec::new();
        match record {
            ResultRecord::LifeProtection(r) => {
                push_currency(&mut lines, "Total monthly expenses", r.total_monthly_expenses);
                lines.push(("Years of support".into(), r.support_years.to_string()));
                lines.push(("Support factor".into(), format!("{:.4}", r.support_factor)));
                push_currency(&mut lines, "Existing coverage", r.existing_coverage);
                push_currency(&mut lines, "Protection needed", r.protection_need);
            }
            ResultRecord::HealthFund(r) => {
                push_currency(&mut lines, "Health fund target", r.fund_needed);
                push_currency(&mut lines, "Monthly contribution", r.monthly_contribution);
                lines.push((
                    "Years to reach the goal".into(),
                    format!("{:.2}", r.years_to_goal),
                ));
                lines.push((
                    "That is".into(),
                    format!("{} year(s) and {} month(s)", r.whole_years, r.extra_months),
                ));
            }
            ResultRecord::EducationFund(r) => {
                lines.push(("Child's age".into(), r.child_age.to_string()));
                lines.push((
                    "Years until college".into(),
                    r.years_until_college.to_string(),
                ));
                push_currency(&mut lines, "Annual fee today", r.annual_fee);
                push_currency(&mut lines, "Future cost of college", r.future_cost);
                push_currency(&mut lines, "Already saved", r.already_saved);
                push_currency(&mut lines, "Still needed", r.remaining_needed);
                push_currency(&mut lines, "Monthly savings required", r.monthly_savings);
            }
            ResultRecord::Retirement(r) => {
                lines.push((
                    "Years until retirement".into(),
                    r.years_until_retirement.to_string(),
                ));
                push_currency(&mut lines, "Annual retirement income", r.annual_retirement_income);
                push_currency(&mut lines, "Total needed at today's prices", r.total_needed);
                lines.push((
                    "Inflation multiplier".into(),
                    format!("{:.4}", r.inflation_multiplier),
                ));
                push_currency(&mut lines, "Future value needed", r.future_value);
                push_currency(&mut lines, "Monthly savings required", r.monthly_savings);
            }
            ResultRecord::SavingsGoal(r) => {
                if !r.client_name.is_empty() {
                    lines.push(("Prepared for".into(), r.client_name.clone()));
                }
                lines.push(("Goal".into(), r.goal.clone()));
                push_currency(&mut lines, "Cost today", r.current_cost);
                lines.push((
                    "Years until the purchase".into(),
                    r.years_until_goal.to_string(),
                ));
                lines.push((
                    "Inflation factor".into(),
                    format!("{:.4}", r.inflation_factor),
                ));
                push_currency(&mut lines, "Future amount needed", r.future_amount_needed);
            }
        }

        Self {
            file_basename: record.export_basename(),
            title: record.kind().title(),
            lines,
        }
    }
}

fn push_currency(lines: &mut Vec<(String, String)>, label: &str, amount: f64) {
    lines.push((label.to_string(), format_currency(amount)));
}

/// Renders a result document into a downloadable file
pub trait DocumentRenderer {
    fn render(&self, document: &ResultDocument) -> Result<PathBuf, RenderError>;
}

/// Writes result documents as two-column CSV files
#[derive(Debug, Clone)]
pub struct CsvDocumentWriter {
    output_dir: PathBuf,
}

impl CsvDocumentWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl DocumentRenderer for CsvDocumentWriter {
    fn render(&self, document: &ResultDocument) -> Result<PathBuf, RenderError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.csv", document.file_basename));
        let mut writer = BufWriter::new(File::create(&path)?);

        writeln!(writer, "Item,Value")?;
        for (label, value) in &document.lines {
            writeln!(writer, "{},{}", csv_quote(label), csv_quote(value))?;
        }
        writer.flush()?;
        Ok(path)
    }
}

fn csv_quote(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Format a currency amount to two decimals with thousands grouping
pub fn format_currency(amount: f64) -> String {
    let rounded = format!("{:.2}", amount.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let grouped = group_digits(whole);
    if amount < 0.0 && rounded != "0.00" {
        format!("-{}.{}", grouped, cents)
    } else {
        format!("{}.{}", grouped, cents)
    }
}

/// Insert thousands separators into a digit string
pub fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::SavingsGoalResult;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(104000.0), "104,000.00");
        assert_eq!(format_currency(1301920.0), "1,301,920.00");
        assert_eq!(format_currency(999.555), "999.56");
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1250000"), "1,250,000");
        assert_eq!(group_digits(""), "");
    }

    fn sample_record() -> ResultRecord {
        ResultRecord::SavingsGoal(SavingsGoalResult {
            goal: "Vehicle".to_string(),
            client_name: "Maria Santos".to_string(),
            current_cost: 100_000.0,
            years_until_goal: 1,
            inflation_factor: 1.04,
            future_amount_needed: 104_000.0,
        })
    }

    #[test]
    fn test_document_from_record() {
        let document = ResultDocument::from_record(&sample_record());

        assert_eq!(document.file_basename, "Savings-Goal-Result");
        assert_eq!(document.title, "Savings Goal");
        assert!(document
            .lines
            .contains(&("Future amount needed".to_string(), "104,000.00".to_string())));
    }

    #[test]
    fn test_csv_writer_renders_to_named_file() {
        let dir = std::env::temp_dir().join("advisory_system_export_test");
        let writer = CsvDocumentWriter::new(&dir);
        let document = ResultDocument::from_record(&sample_record());

        let path = writer.render(&document).expect("render succeeds");
        assert!(path.ends_with("Savings-Goal-Result.csv"));

        let contents = std::fs::read_to_string(&path).expect("file readable");
        assert!(contents.starts_with("Item,Value"));
        assert!(contents.contains("\"104,000.00\""));

        std::fs::remove_dir_all(&dir).ok();
    }
}
