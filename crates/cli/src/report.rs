//! crates/cli/src/report.rs
//! Visitor that prints the listing.

use crate::command::PROGRAM;
use crate::config::CliConfig;
use std::fmt;
use std::io::{self, Write};
use walk::{VisitOutcome, Visitor, WalkError, WalkEvent, WalkStatistics};

/// Prints one line per entry, and optionally per entered directory.
///
/// Errors the walker reports through [`Visitor::on_error`] are printed only
/// when they are not being ignored; ignored errors are logged as warnings by
/// the walker itself.
pub(crate) struct Reporter<'a, Out, Err> {
    stdout: &'a mut Out,
    stderr: &'a mut Err,
    events: bool,
    print_errors: bool,
    limit: Option<u64>,
    listed: u64,
    write_error: Option<io::Error>,
}

impl<'a, Out: Write, Err: Write> Reporter<'a, Out, Err> {
    pub(crate) fn new(config: &CliConfig, stdout: &'a mut Out, stderr: &'a mut Err) -> Self {
        Self {
            stdout,
            stderr,
            events: config.events,
            print_errors: !config.ignore_errors,
            limit: config.limit,
            listed: 0,
            write_error: None,
        }
    }

    /// Prints a diagnostic line to stderr.
    pub(crate) fn report_error(&mut self, error: impl fmt::Display) {
        let _ = writeln!(self.stderr, "{PROGRAM}: {error}");
    }

    /// Whether `--limit` stopped the walk.
    pub(crate) fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.listed >= limit)
    }

    /// Takes the first error hit while writing the listing.
    pub(crate) fn take_write_error(&mut self) -> Option<io::Error> {
        self.write_error.take()
    }

    pub(crate) fn print_summary(&mut self, stats: &WalkStatistics) -> io::Result<()> {
        writeln!(self.stdout, "directories visited: {}", stats.directories_visited)?;
        writeln!(self.stdout, "entries listed: {}", stats.entries_processed)?;
        writeln!(self.stdout, "errors: {}", stats.errors_encountered)?;
        self.stdout.flush()
    }

    fn write_line(&mut self, event: &WalkEvent<'_>) -> io::Result<()> {
        match *event {
            WalkEvent::DirEntered { path, .. } => writeln!(self.stdout, "enter {path}"),
            WalkEvent::Entry { path, resolved, .. } if self.events => {
                writeln!(self.stdout, "{resolved} {path}")
            }
            WalkEvent::Entry { path, .. } => writeln!(self.stdout, "{path}"),
        }
    }
}

impl<Out: Write, Err: Write> Visitor for Reporter<'_, Out, Err> {
    fn visit(&mut self, event: &WalkEvent<'_>) -> VisitOutcome {
        // Diagnostics were already forwarded to tracing.
        logging::clear_events();
        let is_entry = matches!(event, WalkEvent::Entry { .. });
        if !is_entry && !self.events {
            return VisitOutcome::Continue;
        }
        if let Err(error) = self.write_line(event) {
            self.write_error = Some(error);
            return VisitOutcome::Abort;
        }
        if is_entry {
            self.listed += 1;
            if self.limit_reached() {
                return VisitOutcome::Abort;
            }
        }
        VisitOutcome::Continue
    }

    fn on_error(&mut self, error: &WalkError) {
        if self.print_errors {
            self.report_error(error);
        }
    }
}
