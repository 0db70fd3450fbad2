// src/domain/resources.rs
// Read-only tables bundled with the binary

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::errors::ResourceError;

const LUIS_LOCALES: &str = include_str!("../../res/luis_locales.yaml");
const PARSE_TOLUIS_TEXT: &str = include_str!("../../res/parse_toluis.yaml");

/// Minimum Jaro-Winkler similarity for a locale to be offered as a suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The set of cultures LUIS accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locales: BTreeSet<String>,
}

impl LocaleTable {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains(locale)
    }

    /// Known locales close to `value`, most similar first
    pub fn suggest(&self, value: &str) -> Vec<String> {
        let needle = value.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .locales
            .iter()
            .map(|locale| (strsim::jaro_winkler(&needle, locale), locale))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(3)
            .map(|(_, locale)| locale.clone())
            .collect()
    }
}

/// Description, usage and option help for the command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandText {
    pub description: String,
    pub usage: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl CommandText {
    /// Help text for an option, keyed by its long name
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

/// Everything loaded from bundled resources at start-up
#[derive(Debug, Clone)]
pub struct Resources {
    pub locales: LocaleTable,
    pub text: CommandText,
}

impl Resources {
    /// Load the resources compiled into the binary
    pub fn bundled() -> Result<Self, ResourceError> {
        Self::from_yaml(LUIS_LOCALES, PARSE_TOLUIS_TEXT)
    }

    pub fn from_yaml(locales: &str, text: &str) -> Result<Self, ResourceError> {
        let locales: Vec<String> =
            serde_yaml::from_str(locales).map_err(|source| ResourceError::Parse {
                name: "luis_locales",
                source,
            })?;
        if locales.is_empty() {
            return Err(ResourceError::Empty("luis_locales"));
        }

        let text: CommandText =
            serde_yaml::from_str(text).map_err(|source| ResourceError::Parse {
                name: "parse_toluis",
                source,
            })?;

        Ok(Self {
            locales: LocaleTable::new(locales),
            text,
        })
    }
}
