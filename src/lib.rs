//! Placehold - placeholder pages for untranslated static-site content
//!
//! Placehold is a CLI tool and library for multi-language static sites. For
//! every language declared in the site configuration it finds the
//! default-language pages that have no translation yet and writes a
//! placeholder next to them: the original page with a notice banner,
//! language-prefixed aliases and language-relative footer links.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, run loop, reporting)
//! - `config`: Site configuration loading (the language registry)
//! - `content`: Content scanning, translation diffing and placeholder synthesis

pub mod cli;
pub mod config;
pub mod content;
