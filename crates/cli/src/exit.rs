//! Process exit codes, following rsync's numbering where one applies.

use walk::WalkOutcome;

/// Every root was walked without error.
pub const EXIT_OK: i32 = 0;
/// The command line could not be parsed.
pub const EXIT_SYNTAX: i32 = 1;
/// Writing the listing failed.
pub const EXIT_FILE_IO: i32 = 11;
/// The walk was stopped before it finished.
pub const EXIT_ABORTED: i32 = 20;
/// Some entries could not be listed.
pub const EXIT_PARTIAL: i32 = 23;

/// Maps the combined result of all walks to an exit code.
#[must_use]
pub const fn exit_code(outcome: WalkOutcome) -> i32 {
    match outcome {
        WalkOutcome::Complete => EXIT_OK,
        WalkOutcome::Errors(_) => EXIT_PARTIAL,
        WalkOutcome::Aborted => EXIT_ABORTED,
    }
}
