//! Front matter splitting and rendering for Markdown content files.
//!
//! A content file may start with a YAML block fenced by lines of three or
//! more dashes:
//!
//! ```text
//! ---
//! title: About
//! aliases: ["/about-us/"]
//! ---
//!
//! Body text.
//! ```

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_yaml::{Mapping, Value};

// A line made only of dashes, at least three.
static BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-{3,}\r?$").unwrap());

/// Front matter keys in document order.
pub type FrontMatter = Mapping;

/// A content file split into front matter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Document {
    /// Split `content` at the first two boundary lines.
    ///
    /// Only a block that starts the file counts as front matter. Anything
    /// else (no boundary, a single boundary, or text before the first
    /// boundary) leaves the whole text as body with empty front matter.
    pub fn parse(content: &str) -> Result<Self> {
        let segments: Vec<&str> = BOUNDARY_REGEX.splitn(content, 3).collect();

        match segments.as_slice() {
            [leading, front_matter, body] if leading.trim().is_empty() => Ok(Self {
                front_matter: parse_front_matter(front_matter)?,
                body: body.to_string(),
            }),
            _ => Ok(Self {
                front_matter: FrontMatter::new(),
                body: content.to_string(),
            }),
        }
    }

    /// Render as `---`, front matter, `---`, a blank line, then the body.
    pub fn render(&self) -> Result<String> {
        let front_matter =
            serde_yaml::to_string(&self.front_matter).context("Failed to serialize front matter")?;

        Ok(format!(
            "---\n{}\n---\n\n{}\n",
            front_matter.trim(),
            self.body.trim()
        ))
    }
}

fn parse_front_matter(text: &str) -> Result<FrontMatter> {
    if text.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    let value: Value = serde_yaml::from_str(text).context("Failed to parse front matter")?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(FrontMatter::new()),
        other => bail!(
            "Front matter must be a mapping of keys to values, found: {:?}",
            other
        ),
    }
}
