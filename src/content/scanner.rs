use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

/// Markdown files belonging to one language under a content root.
#[derive(Debug, Clone)]
pub struct FileGlob {
    pub language: String,
    /// Paths in traversal order.
    pub files: Vec<PathBuf>,
    pub disclaimer: String,
    /// Entries that could not be read during traversal.
    pub skipped_count: usize,
}

/// How a language's files are named on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming<'a> {
    /// `name.md`, no language segment.
    Default,
    /// `name.<lang>.md`.
    Suffixed(&'a str),
}

impl Naming<'_> {
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Naming::Default => path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.split('.').count() == 2),
            Naming::Suffixed(lang) => path
                .to_string_lossy()
                .contains(&format!(".{}.md", lang)),
        }
    }
}

/// Collect the Markdown files of one language under `root`.
///
/// A root that does not exist yields an empty glob rather than an error.
pub fn collect_language_files(
    root: &Path,
    language: &str,
    naming: Naming<'_>,
    disclaimer: &str,
    verbose: bool,
) -> FileGlob {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    if !root.exists() {
        if verbose {
            eprintln!(
                "{} Content directory does not exist: {}",
                "warning:".bold().yellow(),
                root.display()
            );
        }
        return FileGlob {
            language: language.to_string(),
            files,
            disclaimer: disclaimer.to_string(),
            skipped_count,
        };
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if path.is_file() && is_markdown_file(path) && naming.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    FileGlob {
        language: language.to_string(),
        files,
        disclaimer: disclaimer.to_string(),
        skipped_count,
    }
}

fn is_markdown_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("md"))
}
