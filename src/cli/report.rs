//! Report formatting and printing utilities.
//!
//! Progress goes to stdout, problems go to stderr. Kept apart from the run
//! loop so placehold can be used as a library without any output.

use std::io::{self, Write};

use colored::Colorize;

use super::run::{PlaceholderFailure, RunResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Announce how many placeholders are about to be built for a language.
pub fn print_progress(count: usize, language: &str) {
    print_progress_to(count, language, &mut io::stdout().lock());
}

pub fn print_progress_to<W: Write>(count: usize, language: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "building {} placeholder pages for {}",
        count,
        language.bold()
    );
}

pub fn print(result: &RunResult, verbose: bool) {
    if verbose {
        print_created_to(result, &mut io::stdout().lock());
    }
    print_failures_to(result, &mut io::stderr().lock());
    print_skipped_warning_to(result.skipped_count(), verbose, &mut io::stderr().lock());
    print_summary_to(result, &mut io::stdout().lock());
}

fn print_created_to<W: Write>(result: &RunResult, writer: &mut W) {
    for language in &result.languages {
        for path in &language.created {
            let _ = writeln!(writer, "  {} {}", "created".green(), path.display());
        }
    }
}

fn print_failures_to<W: Write>(result: &RunResult, writer: &mut W) {
    for language in &result.languages {
        for failure in &language.failures {
            print_failure(&language.language, failure, writer);
        }
    }
}

fn print_failure<W: Write>(language: &str, failure: &PlaceholderFailure, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: could not build {} placeholder  {}",
        "error".bold().red(),
        language,
        failure.source.display().to_string().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {} {:#}",
        "=".blue(),
        "note:".bold(),
        failure.error
    );
}

fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_summary_to<W: Write>(result: &RunResult, writer: &mut W) {
    let created = result.created_count();
    let failed = result.failure_count();
    let languages = result.languages.len();

    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} placeholder {} built, {} failed",
            FAILURE_MARK.red(),
            created,
            if created == 1 { "page" } else { "pages" },
            failed.to_string().red()
        );
    } else {
        let msg = format!(
            "Built {} placeholder {} for {} {}",
            created,
            if created == 1 { "page" } else { "pages" },
            languages,
            if languages == 1 {
                "language"
            } else {
                "languages"
            }
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    }
}
