// src/services/error_reporter.rs
// Prints validation failures followed by the command help

use std::io::{self, Write};

use crate::{
    adapters::progress::{MessageType, ProgressManager},
    domain::validation::ValidationReport,
};

pub struct ErrorReporter<'a> {
    progress_manager: &'a ProgressManager,
}

impl<'a> ErrorReporter<'a> {
    pub fn new(progress_manager: &'a ProgressManager) -> Self {
        Self { progress_manager }
    }

    /// One line per surfaced failure
    pub fn format_failures(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        for failure in &report.failures {
            output.push_str(
                &self
                    .progress_manager
                    .format_message(&failure.to_string(), MessageType::Error),
            );
            output.push('\n');
        }
        output
    }

    /// Write the failures to `err`, then the help text to `out`
    pub fn report(
        &self,
        report: &ValidationReport,
        help: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        err.write_all(self.format_failures(report).as_bytes())?;
        err.flush()?;

        writeln!(out)?;
        out.write_all(help.as_bytes())?;
        if !help.ends_with('\n') {
            writeln!(out)?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    #[test]
    fn test_report_writes_message_then_help() {
        let progress = ProgressManager::new(false, false);
        let reporter = ErrorReporter::new(&progress);
        let report = ValidationReport::failed(
            vec![ValidationError::MissingArgument {
                group: vec!["in".to_string(), "lu_folder".to_string()],
            }],
            2,
        );

        let mut out = Vec::new();
        let mut err = Vec::new();
        reporter
            .report(&report, "Usage: ludown parse ToLuis", &mut out, &mut err)
            .unwrap();

        let err = String::from_utf8(err).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            err,
            "✗ Missing argument: one of --in, --lu_folder is required\n"
        );
        assert_eq!(out, "\nUsage: ludown parse ToLuis\n");
    }

    #[test]
    fn test_format_failures_one_line_each() {
        let progress = ProgressManager::new(false, false);
        let reporter = ErrorReporter::new(&progress);
        let report = ValidationReport::failed(
            vec![
                ValidationError::InvalidArgumentValue {
                    name: "luis_culture".to_string(),
                    value: "xx-yy".to_string(),
                    suggestions: Vec::new(),
                },
                ValidationError::MissingArgument {
                    group: vec!["in".to_string()],
                },
            ],
            2,
        );

        assert_eq!(reporter.format_failures(&report).lines().count(), 2);
    }
}
