use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use super::scanner::FileGlob;

/// Path of the `language` variant of a default-language page:
/// `dir/page.md` becomes `dir/page.<language>.md`.
///
/// Returns `None` when the file name does not end in `.md`.
pub fn translated_path(path: &Path, language: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".md")?;
    Some(path.with_file_name(format!("{}.{}.md", stem, language)))
}

/// Default-language files of `base` that have no counterpart in `target`.
///
/// Order follows `base`.
pub fn missing_translations(base: &FileGlob, target: &FileGlob) -> Vec<PathBuf> {
    let present: HashSet<&Path> = target.files.iter().map(PathBuf::as_path).collect();

    base.files
        .iter()
        .filter(|file| match translated_path(file, &target.language) {
            Some(variant) => !present.contains(variant.as_path()),
            None => false,
        })
        .cloned()
        .collect()
}
