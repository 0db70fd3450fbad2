// src/adapters/cli/clap_adapter.rs
use std::{ffi::OsString, path::PathBuf};

use clap::{
    builder::{OsStringValueParser, TypedValueParser},
    ArgGroup, CommandFactory, FromArgMatches, Parser,
};

use crate::domain::{
    options::{ToLuisOptions, LUIS_CULTURE_DEFAULT, LUIS_VERSION_ID_DEFAULT},
    resources::CommandText,
};

/// Long option name to clap argument id
const OPTION_IDS: &[(&str, &str)] = &[
    ("in", "in_file"),
    ("lu_folder", "lu_folder"),
    ("out_folder", "out_folder"),
    ("subfolder", "subfolder"),
    ("luis_name", "luis_name"),
    ("luis_desc", "luis_desc"),
    ("luis_versionId", "luis_version_id"),
    ("luis_culture", "luis_culture"),
    ("write_luis_batch_tests", "write_luis_batch_tests"),
    ("out", "out"),
    ("verbose", "verbose"),
];

/// Convert .lu file(s) into a LUIS model
#[derive(Parser, Debug, Clone)]
#[clap(name = "ludown parse ToLuis")]
#[clap(group(ArgGroup::new("source").args(["in_file", "lu_folder"])))]
pub struct ToLuisArgs {
    /// .lu file to parse
    #[clap(
        long = "in",
        value_name = "luFile",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub in_file: Option<PathBuf>,

    /// Folder with .lu file(s)
    #[clap(
        long = "lu_folder",
        short = 'l',
        value_name = "inputFolder",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub lu_folder: Option<PathBuf>,

    /// Output folder for generated files
    #[clap(
        long = "out_folder",
        short = 'o',
        value_name = "outputFolder",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub out_folder: Option<PathBuf>,

    /// Include sub-folders when looking for .lu files
    #[clap(long = "subfolder", short = 's')]
    pub subfolder: bool,

    /// LUIS app name
    #[clap(long = "luis_name", short = 'n', value_name = "luis_appName")]
    pub luis_name: Option<String>,

    /// LUIS app description
    #[clap(long = "luis_desc", short = 'd', value_name = "luis_appDesc")]
    pub luis_desc: Option<String>,

    /// LUIS version Id
    #[clap(
        long = "luis_versionId",
        short = 'i',
        value_name = "luis_versionId",
        default_value = LUIS_VERSION_ID_DEFAULT
    )]
    pub luis_version_id: String,

    /// LUIS app culture
    #[clap(
        long = "luis_culture",
        short = 'c',
        value_name = "luis_appCulture",
        default_value = LUIS_CULTURE_DEFAULT
    )]
    pub luis_culture: String,

    /// Write out a LUIS batch test file
    #[clap(long = "write_luis_batch_tests", short = 't')]
    pub write_luis_batch_tests: bool,

    /// Output file name for the LUIS model
    #[clap(long = "out", value_name = "OutFileName")]
    pub out: Option<String>,

    /// Get verbose messages from the parser
    #[clap(long)]
    pub verbose: bool,
}

impl ToLuisArgs {
    /// The command definition with description, usage and option help taken
    /// from `text`
    pub fn command_with_text(text: &CommandText) -> clap::Command {
        let mut cmd = Self::command()
            .about(text.description.clone())
            .override_usage(text.usage.clone());

        for (option, id) in OPTION_IDS {
            if let Some(help) = text.option(option) {
                let help = help.to_string();
                cmd = cmd.mut_arg(*id, move |arg| arg.help(help));
            }
        }

        cmd
    }

    pub fn try_parse_with_text<I, T>(text: &CommandText, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_with_text(text).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_path(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|v| !v.as_os_str().is_empty())
}

impl From<ToLuisArgs> for ToLuisOptions {
    fn from(value: ToLuisArgs) -> Self {
        Self {
            in_file: non_empty_path(value.in_file),
            lu_folder: non_empty_path(value.lu_folder),
            out_folder: non_empty_path(value.out_folder),
            subfolder: value.subfolder,
            luis_name: non_empty(value.luis_name),
            luis_desc: non_empty(value.luis_desc),
            luis_version_id: value.luis_version_id,
            luis_culture: value.luis_culture,
            write_luis_batch_tests: value.write_luis_batch_tests,
            out: non_empty(value.out),
            verbose: value.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resources::Resources;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn text() -> CommandText {
        Resources::bundled().unwrap().text
    }

    fn parse(args: &[&str]) -> Result<ToLuisOptions, clap::Error> {
        let argv = std::iter::once("ludown-parse-toluis").chain(args.iter().copied());
        ToLuisArgs::try_parse_with_text(&text(), argv).map(ToLuisOptions::from)
    }

    #[test]
    fn test_cli_verify() {
        ToLuisArgs::command().debug_assert();
        ToLuisArgs::command_with_text(&text()).debug_assert();
    }

    #[test]
    fn test_defaults_applied() {
        let options = parse(&["--in", "./sample.lu"]).unwrap();

        assert_eq!(options.in_file, Some(PathBuf::from("./sample.lu")));
        assert_eq!(options.luis_version_id, "0.1");
        assert_eq!(options.luis_culture, "en-us");
        assert!(!options.verbose);
    }

    #[test]
    fn test_no_arguments_parses() {
        let options = parse(&[]).unwrap();
        assert_eq!(options, ToLuisOptions::default());
    }

    #[test]
    fn test_short_flags() {
        let options = parse(&[
            "-l", "models", "-o", "out", "-s", "-n", "Bot", "-d", "A bot", "-i", "2.0", "-c",
            "fr-fr", "-t",
        ])
        .unwrap();

        assert_eq!(
            options,
            ToLuisOptions {
                in_file: None,
                lu_folder: Some(PathBuf::from("models")),
                out_folder: Some(PathBuf::from("out")),
                subfolder: true,
                luis_name: Some("Bot".to_string()),
                luis_desc: Some("A bot".to_string()),
                luis_version_id: "2.0".to_string(),
                luis_culture: "fr-fr".to_string(),
                write_luis_batch_tests: true,
                out: None,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_long_flags() {
        let options = parse(&[
            "--lu_folder",
            "models",
            "--luis_versionId",
            "1.5",
            "--luis_culture",
            "de-de",
            "--out",
            "model.json",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(options.lu_folder, Some(PathBuf::from("models")));
        assert_eq!(options.luis_version_id, "1.5");
        assert_eq!(options.luis_culture, "de-de");
        assert_eq!(options.out.as_deref(), Some("model.json"));
        assert!(options.verbose);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let options = parse(&["--in", "a.lu", "--luis_name", "", "--out", ""]).unwrap();
        assert!(options.luis_name.is_none());
        assert!(options.out.is_none());
    }

    #[test]
    fn test_empty_paths_are_absent() {
        let options = parse(&["--in", "", "--out_folder", ""]).unwrap();
        assert!(options.in_file.is_none());
        assert!(options.out_folder.is_none());

        let options = parse(&["-l", ""]).unwrap();
        assert!(options.lu_folder.is_none());
    }

    #[test]
    fn test_version_flag_is_not_offered() {
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&["-V"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_in_and_lu_folder_conflict() {
        let err = parse(&["--in", "a.lu", "--lu_folder", "models"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_help_uses_resource_text() {
        let help = ToLuisArgs::command_with_text(&text())
            .render_help()
            .to_string();

        assert!(help.contains("Convert .lu file(s) into LUIS JSON file"));
        assert!(help.contains("--luis_culture <luis_appCulture>"));
        assert!(help.contains("[Optional] LUIS app culture"));
        assert!(help.contains("ludown parse ToLuis --in <luFile>"));
    }
}
