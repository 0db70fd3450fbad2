// src/services/validation_service.rs
// Builds the validators for an invocation and runs them concurrently

use futures::future::{join_all, try_join_all};
use tracing::debug;

use crate::{
    domain::{
        config::ValidationMode, options::ToLuisOptions, resources::LocaleTable,
        validation::ValidationReport,
    },
    ports::filesystem::{FileSystem, PathKind},
    services::validator::{GroupMember, ValidationContext, Validator},
};

/// Validates parsed `parse ToLuis` options
pub struct ValidationService<'a> {
    fs: &'a dyn FileSystem,
    locales: &'a LocaleTable,
    mode: ValidationMode,
}

impl<'a> ValidationService<'a> {
    pub fn new(fs: &'a dyn FileSystem, locales: &'a LocaleTable, mode: ValidationMode) -> Self {
        Self { fs, locales, mode }
    }

    /// The checks that apply to `options`, in declaration order
    pub fn validators_for(options: &ToLuisOptions) -> Vec<Validator> {
        let mut validators = vec![Validator::MissingArgument {
            group: vec![
                GroupMember::new("in", options.in_file.is_some()),
                GroupMember::new("lu_folder", options.lu_folder.is_some()),
            ],
        }];

        if let Some(in_file) = options.in_file() {
            validators.push(Validator::InvalidPath {
                path: in_file.to_path_buf(),
                expected: PathKind::File,
            });
        }

        if let Some(lu_folder) = options.lu_folder() {
            validators.push(Validator::InvalidPath {
                path: lu_folder.to_path_buf(),
                expected: PathKind::Directory,
            });
        }

        if !options.luis_culture.is_empty() {
            validators.push(Validator::InvalidArgumentValue {
                name: "luis_culture".to_string(),
                value: options.luis_culture.clone(),
            });
        }

        validators
    }

    pub async fn validate(&self, options: &ToLuisOptions) -> ValidationReport {
        let validators = Self::validators_for(options);
        let checks_run = validators.len();
        let ctx = ValidationContext {
            fs: self.fs,
            locales: self.locales,
        };

        debug!(checks = checks_run, mode = ?self.mode, "validating arguments");

        match self.mode {
            ValidationMode::FailFast => {
                match try_join_all(validators.iter().map(|v| v.validate(&ctx))).await {
                    Ok(_) => ValidationReport::passed(checks_run),
                    Err(err) => ValidationReport::failed(vec![err], checks_run),
                }
            }
            ValidationMode::CollectAll => {
                let failures: Vec<_> = join_all(validators.iter().map(|v| v.validate(&ctx)))
                    .await
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();

                if failures.is_empty() {
                    ValidationReport::passed(checks_run)
                } else {
                    ValidationReport::failed(failures, checks_run)
                }
            }
        }
    }
}
