// src/domain/options.rs
// The parsed, defaulted option set for `ludown parse ToLuis`

use std::path::{Path, PathBuf};

pub const LUIS_VERSION_ID_DEFAULT: &str = "0.1";
pub const LUIS_CULTURE_DEFAULT: &str = "en-us";

/// Options accepted by `ludown parse ToLuis`, after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToLuisOptions {
    /// `.lu` file to parse
    pub in_file: Option<PathBuf>,
    /// Folder containing `.lu` files
    pub lu_folder: Option<PathBuf>,
    pub out_folder: Option<PathBuf>,
    /// Also look at sub-folders of `lu_folder`
    pub subfolder: bool,
    pub luis_name: Option<String>,
    pub luis_desc: Option<String>,
    pub luis_version_id: String,
    pub luis_culture: String,
    pub write_luis_batch_tests: bool,
    pub out: Option<String>,
    pub verbose: bool,
}

impl Default for ToLuisOptions {
    fn default() -> Self {
        Self {
            in_file: None,
            lu_folder: None,
            out_folder: None,
            subfolder: false,
            luis_name: None,
            luis_desc: None,
            luis_version_id: LUIS_VERSION_ID_DEFAULT.to_string(),
            luis_culture: LUIS_CULTURE_DEFAULT.to_string(),
            write_luis_batch_tests: false,
            out: None,
            verbose: false,
        }
    }
}

impl ToLuisOptions {
    pub fn in_file(&self) -> Option<&Path> {
        self.in_file.as_deref()
    }

    pub fn lu_folder(&self) -> Option<&Path> {
        self.lu_folder.as_deref()
    }

    /// Render the options back into command-line flags, omitting anything
    /// that was not supplied
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(in_file) = &self.in_file {
            args.push("--in".to_string());
            args.push(in_file.to_string_lossy().into_owned());
        }
        if let Some(lu_folder) = &self.lu_folder {
            args.push("--lu_folder".to_string());
            args.push(lu_folder.to_string_lossy().into_owned());
        }
        if let Some(out_folder) = &self.out_folder {
            args.push("--out_folder".to_string());
            args.push(out_folder.to_string_lossy().into_owned());
        }
        if self.subfolder {
            args.push("--subfolder".to_string());
        }
        if let Some(name) = &self.luis_name {
            args.push("--luis_name".to_string());
            args.push(name.clone());
        }
        if let Some(desc) = &self.luis_desc {
            args.push("--luis_desc".to_string());
            args.push(desc.clone());
        }

        args.push("--luis_versionId".to_string());
        args.push(self.luis_version_id.clone());
        args.push("--luis_culture".to_string());
        args.push(self.luis_culture.clone());

        if self.write_luis_batch_tests {
            args.push("--write_luis_batch_tests".to_string());
        }
        if let Some(out) = &self.out {
            args.push("--out".to_string());
            args.push(out.clone());
        }
        if self.verbose {
            args.push("--verbose".to_string());
        }

        args
    }
}

/// Builder pattern for testing
#[derive(Default)]
pub struct ToLuisOptionsBuilder {
    options: ToLuisOptions,
}

impl ToLuisOptionsBuilder {
    pub fn in_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.options.in_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn lu_folder<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.options.lu_folder = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn luis_culture(mut self, culture: &str) -> Self {
        self.options.luis_culture = culture.to_string();
        self
    }

    pub fn build(self) -> ToLuisOptions {
        self.options
    }
}
