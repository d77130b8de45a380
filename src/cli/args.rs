//! CLI argument definitions using clap.
//!
//! Placehold is a single command: point it at the site configuration and it
//! fills every language's content tree with placeholder pages.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Create placeholder pages for untranslated content",
    long_about = None
)]
pub struct Arguments {
    /// Location of the site config
    #[arg(
        short = 'c',
        long = "config_location",
        visible_alias = "config-location",
        value_name = "PATH"
    )]
    pub config_location: PathBuf,

    /// Location of the site content files (overrides each language's contentDir)
    #[arg(
        short = 'f',
        long = "files_location",
        visible_alias = "files-location",
        value_name = "PATH"
    )]
    pub files_location: Option<PathBuf>,

    /// Default content language (overrides defaultContentLanguage in the config)
    #[arg(long, value_name = "CODE")]
    pub default_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
