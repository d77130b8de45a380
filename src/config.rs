use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

pub const DEFAULT_LANGUAGE: &str = "en";

pub const DEFAULT_CONTENT_DIR: &str = "content/";

/// Per-language settings as they appear under `languages.<code>`.
///
/// Site generators keep many more keys here (`weight`, `languageName`, ...);
/// only the ones placeholders need are read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageSettings {
    #[serde(default)]
    disclaimer: Option<String>,
    #[serde(default)]
    content_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub disclaimer: String,
    pub content_dir: Option<String>,
}

impl LanguageEntry {
    /// Content root for this language, falling back to `content/`.
    pub fn content_dir(&self) -> PathBuf {
        PathBuf::from(
            self.content_dir
                .as_deref()
                .unwrap_or(DEFAULT_CONTENT_DIR),
        )
    }
}

/// Languages declared in the site configuration, in declaration order.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    pub default_language: String,
    entries: Vec<LanguageEntry>,
}

impl LanguageRegistry {
    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    /// Every language placeholders are generated for.
    pub fn targets(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries
            .iter()
            .filter(|e| e.code != self.default_language)
    }

    /// Entry for the default language. A registry that does not declare it
    /// gets one with default settings.
    pub fn default_entry(&self) -> LanguageEntry {
        self.get(&self.default_language)
            .cloned()
            .unwrap_or_else(|| LanguageEntry {
                code: self.default_language.clone(),
                disclaimer: String::new(),
                content_dir: None,
            })
    }
}

/// Load the language registry from a site configuration file.
///
/// `default_language` overrides the document's `defaultContentLanguage`,
/// which in turn overrides [`DEFAULT_LANGUAGE`].
pub fn load_registry(path: &Path, default_language: Option<&str>) -> Result<LanguageRegistry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_registry(&content, default_language)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn parse_registry(content: &str, default_language: Option<&str>) -> Result<LanguageRegistry> {
    let document: Value = serde_yaml::from_str(content).context("Failed to parse YAML")?;

    let Some(languages) = document.get("languages") else {
        bail!("Missing 'languages' section");
    };
    let Value::Mapping(languages) = languages else {
        bail!("'languages' must be a mapping of language codes to settings");
    };

    let default_language = match default_language {
        Some(code) => code.to_string(),
        None => match document.get("defaultContentLanguage") {
            Some(Value::String(code)) => code.clone(),
            Some(_) => bail!("'defaultContentLanguage' must be a string"),
            None => DEFAULT_LANGUAGE.to_string(),
        },
    };

    let entries = parse_entries(languages, &default_language)?;

    Ok(LanguageRegistry {
        default_language,
        entries,
    })
}

fn parse_entries(languages: &Mapping, default_language: &str) -> Result<Vec<LanguageEntry>> {
    let mut entries = Vec::with_capacity(languages.len());

    for (key, value) in languages {
        let Value::String(code) = key else {
            bail!("Language code must be a string, found: {:?}", key);
        };

        let settings: LanguageSettings = if value.is_null() {
            LanguageSettings::default()
        } else {
            serde_yaml::from_value(value.clone())
                .with_context(|| format!("Invalid settings for language '{}'", code))?
        };

        let disclaimer = match settings.disclaimer {
            Some(disclaimer) => disclaimer,
            None if code == default_language => String::new(),
            None => bail!("Language '{}' has no 'disclaimer' setting", code),
        };

        entries.push(LanguageEntry {
            code: code.clone(),
            disclaimer,
            content_dir: settings.content_dir,
        });
    }

    Ok(entries)
}
