//! Main loop of the placehold CLI.
//!
//! Loads the language registry once, collects the default-language pages,
//! then for every other language writes a placeholder for each page that
//! has no translation yet.
//!
//! # Returns
//! - `Ok(RunResult)` with the placeholders written and the ones that failed
//! - `Err` if the configuration cannot be loaded
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{args::Arguments, report};
use crate::{
    config::{LanguageEntry, load_registry},
    content::{
        FileGlob, LinkRewriter, Naming, collect_language_files, create_placeholder_file,
        missing_translations,
    },
};

/// A placeholder that could not be built.
#[derive(Debug)]
pub struct PlaceholderFailure {
    /// The default-language page it was built from.
    pub source: PathBuf,
    pub error: anyhow::Error,
}

/// Outcome for one target language.
#[derive(Debug)]
pub struct LanguageRun {
    pub language: String,
    pub created: Vec<PathBuf>,
    pub failures: Vec<PlaceholderFailure>,
    /// Entries the content scan could not read.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct RunResult {
    pub default_language: String,
    /// Entries the default-language scan could not read.
    pub base_skipped_count: usize,
    pub languages: Vec<LanguageRun>,
}

impl RunResult {
    pub fn created_count(&self) -> usize {
        self.languages.iter().map(|l| l.created.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.languages.iter().map(|l| l.failures.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.base_skipped_count + self.languages.iter().map(|l| l.skipped_count).sum::<usize>()
    }
}

pub fn run(args: &Arguments) -> Result<RunResult> {
    let registry = load_registry(&args.config_location, args.default_language.as_deref())?;
    let files_location = args.files_location.as_deref();
    let verbose = args.verbose;

    let mut reserved: Vec<&str> = registry.codes().collect();
    if registry.get(&registry.default_language).is_none() {
        reserved.push(&registry.default_language);
    }
    let links = LinkRewriter::new(reserved);

    let default_entry = registry.default_entry();
    let base = collect_language_files(
        &content_root(files_location, &default_entry),
        &default_entry.code,
        Naming::Default,
        &default_entry.disclaimer,
        verbose,
    );

    let mut languages = Vec::new();
    for entry in registry.targets() {
        let target = collect_language_files(
            &content_root(files_location, entry),
            &entry.code,
            Naming::Suffixed(&entry.code),
            &entry.disclaimer,
            verbose,
        );

        let missing = missing_translations(&base, &target);
        report::print_progress(missing.len(), &entry.code);

        languages.push(build_language(&missing, &target, &links));
    }

    Ok(RunResult {
        default_language: registry.default_language.clone(),
        base_skipped_count: base.skipped_count,
        languages,
    })
}

fn content_root(files_location: Option<&Path>, entry: &LanguageEntry) -> PathBuf {
    match files_location {
        Some(path) => path.to_path_buf(),
        None => entry.content_dir(),
    }
}

/// Write one placeholder per missing page. A page that fails is recorded
/// and the rest are still written.
fn build_language(missing: &[PathBuf], target: &FileGlob, links: &LinkRewriter) -> LanguageRun {
    let mut created = Vec::new();
    let mut failures = Vec::new();

    for source in missing {
        match create_placeholder_file(source, target, links) {
            Ok(dest) => created.push(dest),
            Err(error) => failures.push(PlaceholderFailure {
                source: source.clone(),
                error,
            }),
        }
    }

    LanguageRun {
        language: target.language.clone(),
        created,
        failures,
        skipped_count: target.skipped_count,
    }
}
