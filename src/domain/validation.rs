// src/domain/validation.rs
use super::errors::{ValidationError, ValidationErrorKind};

/// Aggregated outcome of validating one invocation's arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Failures in the order they are surfaced to the user
    pub failures: Vec<ValidationError>,
    /// Number of validators that ran
    pub checks_run: usize,
}

impl ValidationReport {
    pub fn passed(checks_run: usize) -> Self {
        Self {
            failures: Vec::new(),
            checks_run,
        }
    }

    pub fn failed(failures: Vec<ValidationError>, checks_run: usize) -> Self {
        Self {
            failures,
            checks_run,
        }
    }

    /// Returns true if no validator failed
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Kinds of the surfaced failures, in the same order
    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.failures.iter().map(ValidationError::kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::InvalidPathReason;
    use std::path::PathBuf;

    #[test]
    fn test_passed_report() {
        let report = ValidationReport::passed(3);
        assert!(report.is_valid());
        assert!(report.kinds().is_empty());
        assert_eq!(report.checks_run, 3);
    }

    #[test]
    fn test_failed_report_kinds() {
        let report = ValidationReport::failed(
            vec![
                ValidationError::InvalidPath {
                    path: PathBuf::from("a.lu"),
                    reason: InvalidPathReason::NotFound,
                },
                ValidationError::InvalidArgumentValue {
                    name: "luis_culture".to_string(),
                    value: "xx-yy".to_string(),
                    suggestions: Vec::new(),
                },
            ],
            3,
        );

        assert!(!report.is_valid());
        assert_eq!(
            report.kinds(),
            vec![
                ValidationErrorKind::InvalidPath,
                ValidationErrorKind::InvalidArgumentValue,
            ]
        );
    }
}
