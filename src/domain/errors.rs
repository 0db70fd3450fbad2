// src/domain/errors.rs
// Error types raised while validating command arguments

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The kind of check that rejected the arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingArgument,
    InvalidPath,
    InvalidArgumentValue,
}

/// Why a path was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPathReason {
    /// Nothing exists at the path
    NotFound,
    /// A file was expected but a directory was found
    NotAFile,
    /// A directory was expected but a file was found
    NotADirectory,
    /// The lookup itself failed
    Unreadable(String),
}

impl fmt::Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPathReason::NotFound => f.write_str("does not exist"),
            InvalidPathReason::NotAFile => f.write_str("is a directory, expected a file"),
            InvalidPathReason::NotADirectory => f.write_str("is not a directory"),
            InvalidPathReason::Unreadable(reason) => write!(f, "could not be read ({})", reason),
        }
    }
}

/// A single rejected argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing argument: one of {} is required", format_group(.group))]
    MissingArgument { group: Vec<String> },

    #[error("Invalid path: '{}' {reason}", .path.display())]
    InvalidPath {
        path: PathBuf,
        reason: InvalidPathReason,
    },

    #[error("Invalid value '{value}' for --{name}{}", format_suggestions(.suggestions))]
    InvalidArgumentValue {
        name: String,
        value: String,
        suggestions: Vec<String>,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingArgument { .. } => ValidationErrorKind::MissingArgument,
            ValidationError::InvalidPath { .. } => ValidationErrorKind::InvalidPath,
            ValidationError::InvalidArgumentValue { .. } => {
                ValidationErrorKind::InvalidArgumentValue
            }
        }
    }
}

fn format_group(group: &[String]) -> String {
    group
        .iter()
        .map(|name| format!("--{}", name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}

/// Errors raised while loading the bundled resources
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Failed to parse resource '{name}': {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Resource '{0}' is empty")]
    Empty(&'static str),
}
