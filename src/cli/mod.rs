use anyhow::Result;

use crate::cli::exit_code::exit_status_from_result;

mod args;
mod exit_code;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{LanguageRun, PlaceholderFailure, RunResult};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let result = run::run(&args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}
