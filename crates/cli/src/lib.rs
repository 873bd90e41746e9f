#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of `treewalk`. It parses the
//! command line with [`clap`](https://docs.rs/clap/), walks every ROOT with
//! the `walk` crate, and prints one line per entry.
//!
//! # Design
//!
//! [`run`] accepts the argument list together with handles for standard
//! output and error so the whole front end can be exercised in-process.
//! Options map one to one onto [`walk::WalkOptions`]; `-v`, `--info`, and
//! `--debug` configure the `logging` crate, whose diagnostics are written to
//! stderr through a `tracing` subscriber. Roots are walked in order with one
//! shared [`walk::VisitedSet`], so `--once` holds across roots.
//!
//! # Errors
//!
//! Argument problems exit with `1`. Walk results map to rsync's codes: `23`
//! when some entries could not be listed, `20` when the walk was stopped
//! (including by `--limit`), and `11` when the listing itself could not be
//! written.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["treewalk", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8_lossy(&stdout).contains("treewalk"));
//! assert!(stderr.is_empty());
//! ```

mod command;
mod config;
mod exit;
mod report;

pub use config::CliError;
pub use exit::{EXIT_ABORTED, EXIT_FILE_IO, EXIT_OK, EXIT_PARTIAL, EXIT_SYNTAX, exit_code};

use clap::error::ErrorKind;
use command::{PROGRAM, clap_command};
use config::CliConfig;
use logging::info_log;
use report::Reporter;
use std::ffi::OsString;
use std::io::Write;
use walk::{VisitedSet, WalkOutcome, WalkStatistics, walk_with_visited};

/// Parses `arguments`, walks every root, and returns the process exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(arguments) {
        Ok(matches) => matches,
        Err(error) => return render_clap_error(&error, stdout, stderr),
    };
    let config = match CliConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM}: {error}");
            return EXIT_SYNTAX;
        }
    };

    logging::init_tracing(config.verbosity.clone(), config.quiet);
    execute(&config, stdout, stderr)
}

fn render_clap_error<Out: Write, Err: Write>(
    error: &clap::Error,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32 {
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{rendered}");
            EXIT_OK
        }
        _ => {
            let _ = write!(stderr, "{rendered}");
            EXIT_SYNTAX
        }
    }
}

fn execute<Out: Write, Err: Write>(config: &CliConfig, stdout: &mut Out, stderr: &mut Err) -> i32 {
    let mut stats = WalkStatistics::new();
    let mut visited = VisitedSet::new();
    let mut reporter = Reporter::new(config, stdout, stderr);
    let mut errors = 0;
    let mut aborted = false;

    for root in &config.roots {
        match walk_with_visited(root, &config.options, &mut stats, &mut visited, &mut reporter) {
            Ok(WalkOutcome::Complete) => {}
            Ok(WalkOutcome::Errors(count)) => errors += count,
            Ok(WalkOutcome::Aborted) => {
                aborted = true;
                break;
            }
            Err(error) => {
                reporter.report_error(&error);
                errors += 1;
            }
        }
    }

    if let Some(error) = reporter.take_write_error() {
        reporter.report_error(format_args!("failed to write listing: {error}"));
        return EXIT_FILE_IO;
    }
    if aborted && reporter.limit_reached() {
        info_log!(Stats, 1, "stopped after {} entries", stats.entries_processed);
    }
    info_log!(
        Stats,
        1,
        "{} directories, {} entries, {} errors",
        stats.directories_visited,
        stats.entries_processed,
        stats.errors_encountered
    );
    if config.stats && reporter.print_summary(&stats).is_err() {
        return EXIT_FILE_IO;
    }

    let outcome = if aborted {
        WalkOutcome::Aborted
    } else if errors > 0 {
        WalkOutcome::Errors(errors)
    } else {
        WalkOutcome::Complete
    };
    exit_code(outcome)
}

#[cfg(test)]
mod tests;
