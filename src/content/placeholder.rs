use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_yaml::Value;

use super::{
    diff::translated_path,
    front_matter::{Document, FrontMatter},
    links::LinkRewriter,
    scanner::FileGlob,
};

/// Front matter flag set on pages that carry a disclaimer.
pub const PLACEHOLDER_KEY: &str = "placeholder";

pub fn notice_html(disclaimer: &str) -> String {
    format!(
        "<div class='alert alert-info'><strong>NOTICE:</strong>{}</div>",
        disclaimer
    )
}

/// Write the placeholder for `template` in the language of `target`.
///
/// The file lands next to `template` as `<stem>.<lang>.md`, replacing any
/// existing file. Returns the path written.
pub fn create_placeholder_file(
    template: &Path,
    target: &FileGlob,
    links: &LinkRewriter,
) -> Result<PathBuf> {
    let dest = translated_path(template, &target.language)
        .with_context(|| format!("Not a Markdown file: {}", template.display()))?;

    let content = fs::read_to_string(template)
        .with_context(|| format!("Failed to read file: {}", template.display()))?;

    let placeholder = build_placeholder(&content, &target.language, &target.disclaimer, links)
        .with_context(|| format!("Failed to build placeholder from: {}", template.display()))?;

    fs::write(&dest, placeholder)
        .with_context(|| format!("Failed to write file: {}", dest.display()))?;

    Ok(dest)
}

/// Build placeholder content for `language` from a default-language page.
pub fn build_placeholder(
    content: &str,
    language: &str,
    disclaimer: &str,
    links: &LinkRewriter,
) -> Result<String> {
    let mut doc = Document::parse(content)?;

    rewrite_aliases(&mut doc.front_matter, language);

    if !disclaimer.is_empty() {
        doc.body = format!("{}\n\n{}", notice_html(disclaimer), doc.body.trim_start());
        doc.front_matter
            .insert(Value::from(PLACEHOLDER_KEY), Value::Bool(true));
    }

    doc.body = links.rewrite(language, doc.body.trim());

    doc.render()
}

/// Move every alias under `/<language>`, keeping order.
fn rewrite_aliases(front_matter: &mut FrontMatter, language: &str) {
    let Some(aliases) = front_matter.get_mut("aliases") else {
        return;
    };

    match aliases {
        Value::Sequence(items) => {
            for item in items {
                if let Value::String(alias) = item {
                    *alias = format!("/{}{}", language, alias);
                }
            }
        }
        Value::String(alias) => *alias = format!("/{}{}", language, alias),
        _ => {}
    }
}
