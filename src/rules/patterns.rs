//! Compiled text patterns for identity fields

use regex::Regex;

/// Compiled patterns for name, email, and mobile entries
#[derive(Debug, Clone)]
pub struct Patterns {
    full_name: Regex,
    email: Regex,
    mobile: Regex,
}

impl Patterns {
    /// Compile the standard pattern set
    pub fn compile() -> Self {
        Self {
            // Letters with interior spaces, hyphens, apostrophes, periods
            full_name: Regex::new(r"^[A-Za-z][A-Za-z .'-]*$").expect("valid name pattern"),
            // Exactly one @ with at least one dot in the domain part
            email: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"),
            // Digits only, checked after stripping spaces/dashes/parens
            mobile: Regex::new(r"^[0-9]{10,15}$").expect("valid mobile pattern"),
        }
    }

    /// Whether a trimmed entry is an acceptable person name
    pub fn is_full_name(&self, raw: &str) -> bool {
        self.full_name.is_match(raw.trim())
    }

    /// Whether a trimmed entry is an acceptable email address
    pub fn is_email(&self, raw: &str) -> bool {
        self.email.is_match(raw.trim())
    }

    /// Whether an entry is an acceptable mobile number
    ///
    /// Spaces, dashes, and parentheses are stripped first; what remains must
    /// be 10-15 digits.
    pub fn is_mobile(&self, raw: &str) -> bool {
        self.mobile.is_match(&normalize_mobile(raw))
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::compile()
    }
}

/// Strip the separators commonly typed into a phone number
pub fn normalize_mobile(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_pattern() {
        let patterns = Patterns::compile();

        assert!(patterns.is_full_name("Maria Santos"));
        assert!(patterns.is_full_name("O'Neill"));
        assert!(patterns.is_full_name("Jean-Luc Picard"));
        assert!(!patterns.is_full_name(""));
        assert!(!patterns.is_full_name("12345"));
        assert!(!patterns.is_full_name("-leading"));
    }

    #[test]
    fn test_email_pattern() {
        let patterns = Patterns::compile();

        assert!(patterns.is_email("client@example.com"));
        assert!(patterns.is_email("a.b@mail.example.co"));
        assert!(!patterns.is_email("no-at-sign.example.com"));
        assert!(!patterns.is_email("two@@example.com"));
        assert!(!patterns.is_email("dotless@example"));
        assert!(!patterns.is_email("spaced @example.com"));
    }

    #[test]
    fn test_mobile_pattern() {
        let patterns = Patterns::compile();

        assert!(patterns.is_mobile("09171234567"));
        assert!(patterns.is_mobile("(0917) 123-4567"));
        assert!(patterns.is_mobile("0917 123 4567"));
        assert!(!patterns.is_mobile("123456789")); // nine digits
        assert!(!patterns.is_mobile("1234567890123456")); // sixteen digits
        assert!(!patterns.is_mobile("+639171234567")); // plus is not stripped
    }
}
