// src/services/parse_toluis_command.rs
// `ludown parse ToLuis`: parse, validate, then report or dispatch

use std::{ffi::OsString, io::Write};

use clap::error::ErrorKind;
use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::{
    adapters::{
        cli::clap_adapter::ToLuisArgs,
        progress::{MessageType, ProgressManager},
    },
    domain::{config::AppConfig, options::ToLuisOptions, resources::Resources},
    ports::{converter::LuisConverter, filesystem::FileSystem},
    services::{error_reporter::ErrorReporter, validation_service::ValidationService},
};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Help goes to `out` and exits 0. Every other clap error is a usage error.
fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp => {
            let _ = write!(out, "{}", e.render());
            EXIT_SUCCESS
        }
        _ => {
            let _ = write!(err, "{}", e.render());
            EXIT_USAGE
        }
    }
}

pub struct ParseToLuisCommand<'a> {
    fs: &'a dyn FileSystem,
    converter: &'a dyn LuisConverter,
    resources: &'a Resources,
    config: &'a AppConfig,
    progress_manager: &'a ProgressManager,
}

impl<'a> ParseToLuisCommand<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        converter: &'a dyn LuisConverter,
        resources: &'a Resources,
        config: &'a AppConfig,
        progress_manager: &'a ProgressManager,
    ) -> Self {
        Self {
            fs,
            converter,
            resources,
            config,
            progress_manager,
        }
    }

    fn parse<I, T>(&self, args: I) -> Result<ToLuisOptions, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ToLuisArgs::try_parse_with_text(&self.resources.text, args).map(ToLuisOptions::from)
    }

    /// Rendered help for the command
    pub fn help(&self) -> String {
        let mut cmd = ToLuisArgs::command_with_text(&self.resources.text);
        let help = cmd.render_help();
        if self.progress_manager.use_colors() {
            help.ansi().to_string()
        } else {
            help.to_string()
        }
    }

    /// Parse `args` and run the command, returning the exit code.
    /// `on_parsed` sees the options before anything is validated; it is not
    /// called when clap rejects the arguments or prints help.
    pub async fn execute<I, T, F>(
        &self,
        args: I,
        on_parsed: F,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: FnOnce(&ToLuisOptions),
    {
        match self.parse(args) {
            Ok(options) => {
                on_parsed(&options);
                self.run(&options, out, err).await
            }
            Err(e) => report_parse_error(&e, out, err),
        }
    }

    /// Validate already-parsed options and dispatch them on success
    pub async fn run(&self, options: &ToLuisOptions, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        let validation = ValidationService::new(
            self.fs,
            &self.resources.locales,
            self.config.validation_mode,
        );
        let report = validation.validate(options).await;

        if !report.is_valid() {
            warn!(kinds = ?report.kinds(), "validation failed");
            let reporter = ErrorReporter::new(self.progress_manager);
            if let Err(e) = reporter.report(&report, &self.help(), out, err) {
                warn!(error = %e, "failed to write validation report");
            }
            return EXIT_FAILURE;
        }

        debug!(checks = report.checks_run, "validation passed");
        self.dispatch(options, out, err).await
    }

    async fn dispatch(&self, options: &ToLuisOptions, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        let description = self.converter.describe();
        info!(converter = %description, "dispatching conversion");

        // Debug logs share stderr with the spinner
        let spinner = if options.verbose {
            ProgressBar::hidden()
        } else {
            self.progress_manager
                .spinner(&format!("Converting with {}", description))
        };
        let result = self.converter.convert(options).await;
        spinner.finish_and_clear();

        match result {
            Ok(output) => {
                let _ = out.write_all(output.stdout.as_bytes());
                let _ = err.write_all(output.stderr.as_bytes());

                if output.success() {
                    debug!(duration = ?output.duration, "conversion finished");
                } else {
                    let message = format!(
                        "Conversion failed: {} exited with code {} after {}",
                        description,
                        output.exit_code,
                        self.progress_manager.format_duration(output.duration)
                    );
                    let _ = writeln!(
                        err,
                        "{}",
                        self.progress_manager
                            .format_message(&message, MessageType::Error)
                    );
                }

                output.exit_code
            }
            Err(e) => {
                let _ = writeln!(
                    err,
                    "{}",
                    self.progress_manager
                        .format_message(&e.to_string(), MessageType::Error)
                );
                EXIT_FAILURE
            }
        }
    }
}
