//! crates/cli/src/command.rs
//! `clap` command definition for the `treewalk` front end.

use clap::builder::{OsStringValueParser, RangedU64ValueParser};
use clap::{Arg, ArgAction, Command, value_parser};

/// Program name used in usage text and diagnostics.
pub(crate) const PROGRAM: &str = "treewalk";

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Walk directory trees and list every entry.")
        .arg(
            Arg::new("roots")
                .value_name("ROOT")
                .help("Directories to walk (default: the current directory).")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-recurse")
                .long("no-recurse")
                .help("List only the entries of each ROOT.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("follow-links")
                .long("follow-links")
                .short('L')
                .help("Treat links to directories as directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Enter each physical directory at most once.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .short('d')
                .value_name("N")
                .help("Do not list entries deeper than N (0 = unlimited).")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("dirs-only")
                .long("dirs-only")
                .help("List only directories.")
                .action(ArgAction::SetTrue)
                .conflicts_with("files-only"),
        )
        .arg(
            Arg::new("files-only")
                .long("files-only")
                .help("List only entries that are not directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-errors")
                .long("ignore-errors")
                .short('i')
                .help("Keep going after errors instead of abandoning the directory.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress warnings about ignored errors.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("chdir")
                .long("chdir")
                .help("Change into each directory while listing it.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic verbosity (repeatable).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug categories: walk, dir, dup, chdir, stat, all, none.")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Enable info categories: stats, skip, all, none.")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print walk statistics when done.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("events")
                .long("events")
                .help("Print directory entries and entry kinds.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("N")
                .help("Stop after listing N entries.")
                .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        clap_command().debug_assert();
    }

    #[test]
    fn debug_flags_split_on_commas() {
        let matches = clap_command()
            .try_get_matches_from(["treewalk", "--debug", "walk2,dir", "--debug=stat"])
            .expect("parse");
        let flags: Vec<&String> = matches.get_many("debug").expect("debug flags").collect();
        assert_eq!(flags, ["walk2", "dir", "stat"]);
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(
            clap_command()
                .try_get_matches_from(["treewalk", "--limit", "0"])
                .is_err()
        );
    }
}
