// src/services/validator.rs
// The closed set of argument checks run before dispatch

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    domain::{
        errors::{InvalidPathReason, ValidationError},
        resources::LocaleTable,
    },
    ports::filesystem::{FileSystem, FileSystemError, PathKind},
};

/// One member of a mutually-required argument group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub name: String,
    pub supplied: bool,
}

impl GroupMember {
    pub fn new(name: &str, supplied: bool) -> Self {
        Self {
            name: name.to_string(),
            supplied,
        }
    }
}

/// A configured check over one piece of the parsed options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// At least one member of the group must be supplied
    MissingArgument { group: Vec<GroupMember> },

    /// The path must exist and be of the expected kind
    InvalidPath { path: PathBuf, expected: PathKind },

    /// The value must be one of the known locales
    InvalidArgumentValue { name: String, value: String },
}

/// Read-only collaborators shared by every validator
pub struct ValidationContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub locales: &'a LocaleTable,
}

impl Validator {
    pub fn name(&self) -> &'static str {
        match self {
            Validator::MissingArgument { .. } => "missing-argument",
            Validator::InvalidPath { .. } => "invalid-path",
            Validator::InvalidArgumentValue { .. } => "invalid-argument-value",
        }
    }

    pub async fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        debug!(validator = self.name(), "running validator");

        let result = match self {
            Validator::MissingArgument { group } => check_group(group),
            Validator::InvalidPath { path, expected } => {
                check_path(ctx.fs, path, *expected).await
            }
            Validator::InvalidArgumentValue { name, value } => {
                check_locale(ctx.locales, name, value)
            }
        };

        match &result {
            Ok(()) => debug!(validator = self.name(), "validator passed"),
            Err(err) => debug!(validator = self.name(), error = %err, "validator failed"),
        }

        result
    }
}

fn check_group(group: &[GroupMember]) -> Result<(), ValidationError> {
    if group.iter().any(|member| member.supplied) {
        Ok(())
    } else {
        Err(ValidationError::MissingArgument {
            group: group.iter().map(|member| member.name.clone()).collect(),
        })
    }
}

async fn check_path(
    fs: &dyn FileSystem,
    path: &Path,
    expected: PathKind,
) -> Result<(), ValidationError> {
    let expanded = fs.expand_path(path);

    let reason = match fs.path_kind(&expanded).await {
        Ok(Some(kind)) if kind == expected => return Ok(()),
        Ok(Some(_)) => match expected {
            PathKind::File => InvalidPathReason::NotAFile,
            PathKind::Directory => InvalidPathReason::NotADirectory,
        },
        Ok(None) => InvalidPathReason::NotFound,
        Err(FileSystemError::PermissionDenied(_)) => {
            InvalidPathReason::Unreadable("permission denied".to_string())
        }
        Err(FileSystemError::IoError(err)) => InvalidPathReason::Unreadable(err.to_string()),
    };

    Err(ValidationError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    })
}

fn check_locale(locales: &LocaleTable, name: &str, value: &str) -> Result<(), ValidationError> {
    if locales.contains(value) {
        return Ok(());
    }

    Err(ValidationError::InvalidArgumentValue {
        name: name.to_string(),
        value: value.to_string(),
        suggestions: locales.suggest(value),
    })
}
