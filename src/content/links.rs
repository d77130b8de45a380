//! Language-relative rewriting of Markdown reference links.
//!
//! Footer link definitions such as `[1]: /docs/install/` point at absolute
//! site paths. In a placeholder page they must point into the page's own
//! language tree, so `/docs/install/` becomes `/fr/docs/install/`.

use colored::Colorize;
use regex::{Captures, Regex, RegexBuilder};

const REFERENCE_SIZE_LIMIT: usize = 1 << 20;

/// Rewrites numbered reference links to be relative to one language.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    /// Path prefixes that already name a language.
    reserved: Vec<String>,
    size_limit: usize,
}

impl LinkRewriter {
    /// `reserved` is the set of language codes whose paths are left alone,
    /// usually every language in the registry.
    pub fn new<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            reserved: reserved.into_iter().map(str::to_string).collect(),
            size_limit: REFERENCE_SIZE_LIMIT,
        }
    }

    /// Rewrite the footer links of `content` for `language`.
    ///
    /// Best effort: on failure the content is returned unchanged.
    pub fn rewrite(&self, language: &str, content: &str) -> String {
        match self.try_rewrite(language, content) {
            Ok(rewritten) => rewritten,
            Err(e) => {
                eprintln!(
                    "{} Failed to update links for '{}': {}",
                    "warning:".bold().yellow(),
                    language,
                    e
                );
                content.to_string()
            }
        }
    }

    fn try_rewrite(&self, language: &str, content: &str) -> Result<String, regex::Error> {
        let reference = self.reference_regex()?;
        let prefix = language.to_lowercase();

        let rewritten = reference.replace_all(content, |caps: &Captures| {
            if caps.name("reserved").is_some() {
                caps[0].to_string()
            } else {
                format!("{}/{}/{}", &caps["head"], prefix, &caps["path"])
            }
        });

        Ok(rewritten.into_owned())
    }

    fn reference_regex(&self) -> Result<Regex, regex::Error> {
        let reserved = if self.reserved.is_empty() {
            String::new()
        } else {
            let codes = self
                .reserved
                .iter()
                .map(|code| regex::escape(code))
                .collect::<Vec<_>>()
                .join("|");
            format!("(?P<reserved>(?:{})/)?", codes)
        };

        RegexBuilder::new(&format!(
            r"^(?P<head>\[[0-9]+\]:\s*)/{}(?P<path>.*)$",
            reserved
        ))
        .multi_line(true)
        .case_insensitive(true)
        .size_limit(self.size_limit)
        .build()
    }
}
