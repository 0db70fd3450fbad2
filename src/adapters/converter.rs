// src/adapters/converter.rs
// Runs an external program to perform the LUIS conversion

use std::{process::Stdio, time::Instant};

use tokio::process::Command;
use tracing::{debug, info};

use crate::{
    domain::{config::ConverterConfig, options::ToLuisOptions},
    ports::converter::{ConversionError, ConversionOutput, LuisConverter},
};

#[derive(Debug, Clone)]
pub struct ProcessConverter {
    program: String,
    leading_args: Vec<String>,
}

impl ProcessConverter {
    pub fn new(program: &str, leading_args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            leading_args,
        }
    }

    /// Full argument list passed to the program
    pub fn args_for(&self, options: &ToLuisOptions) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.extend(options.to_args());
        args
    }
}

impl From<&ConverterConfig> for ProcessConverter {
    fn from(value: &ConverterConfig) -> Self {
        Self::new(&value.program, value.args.clone())
    }
}

#[async_trait::async_trait]
impl LuisConverter for ProcessConverter {
    fn describe(&self) -> String {
        if self.leading_args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.leading_args.join(" "))
        }
    }

    async fn convert(&self, options: &ToLuisOptions) -> Result<ConversionOutput, ConversionError> {
        let args = self.args_for(options);
        info!(program = %self.program, ?args, "starting converter");

        let start_time = Instant::now();
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ConversionError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        let exit_code = output.status.code().ok_or_else(|| ConversionError::Terminated {
            program: self.program.clone(),
        })?;

        let duration = start_time.elapsed();
        debug!(exit_code, ?duration, "converter finished");

        Ok(ConversionOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
            duration,
        })
    }
}
