//! Accumulating validation result.

use std::fmt;

/// Outcome of a validation pass
///
/// Unlike codec errors, validation keeps going after the first failure and
/// collects every message, so `errors` lists all violations in the order the
/// rules ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}

impl ValidationReport {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
        }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    /// Record `message` unless `condition` holds
    pub fn ensure(&mut self, condition: bool, message: impl FnOnce() -> String) {
        if !condition {
            self.push_error(message());
        }
    }

    /// Fold another report's errors into this one
    pub fn absorb(&mut self, other: ValidationReport) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    pub fn merge(reports: impl IntoIterator<Item = ValidationReport>) -> Self {
        reports.into_iter().fold(Self::ok(), |mut acc, report| {
            acc.absorb(report);
            acc
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            f.write_str("valid")
        } else {
            write!(f, "invalid: {}", self.errors.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_every_error_in_order() {
        let merged = ValidationReport::merge([
            ValidationReport::ok(),
            ValidationReport::fail("first"),
            ValidationReport::ok(),
            ValidationReport::fail("second"),
        ]);
        assert!(!merged.is_valid);
        assert_eq!(merged.errors, vec!["first", "second"]);
    }

    #[test]
    fn test_merge_of_nothing_is_valid() {
        let merged = ValidationReport::merge(Vec::new());
        assert!(merged.is_valid);
        assert!(merged.errors.is_empty());
        assert_eq!(merged.to_string(), "valid");
    }

    #[test]
    fn test_ensure() {
        let mut report = ValidationReport::ok();
        report.ensure(true, || "unused".to_string());
        assert!(report.is_valid);
        report.ensure(false, || "amount is zero".to_string());
        assert_eq!(report.to_string(), "invalid: amount is zero");
    }
}
