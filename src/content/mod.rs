//! Content tree handling: finding pages per language, diffing them against
//! the default language, and synthesizing placeholder pages.

pub mod diff;
pub mod front_matter;
pub mod links;
pub mod placeholder;
pub mod scanner;

pub use diff::{missing_translations, translated_path};
pub use front_matter::{Document, FrontMatter};
pub use links::LinkRewriter;
pub use placeholder::{build_placeholder, create_placeholder_file};
pub use scanner::{FileGlob, Naming, collect_language_files};
