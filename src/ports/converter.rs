// src/ports/converter.rs
// Boundary to the routine that turns .lu markup into a LUIS model

use std::time::Duration;

use thiserror::Error;

use crate::domain::options::ToLuisOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl ConversionOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to start converter '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("Converter '{program}' was terminated by a signal")]
    Terminated { program: String },
}

/// Port for the external conversion routine. Only called with options that
/// passed validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LuisConverter: Send + Sync {
    /// Human-readable name of what will run
    fn describe(&self) -> String;

    async fn convert(&self, options: &ToLuisOptions) -> Result<ConversionOutput, ConversionError>;
}
