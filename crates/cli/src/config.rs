//! crates/cli/src/config.rs
//! Translation of parsed arguments into walk options and verbosity.

use clap::ArgMatches;
use logging::VerbosityConfig;
use std::ffi::OsString;
use thiserror::Error;
use walk::WalkOptions;

/// Argument problems detected after `clap` accepted the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// A root operand is not valid UTF-8.
    #[error("root path is not valid UTF-8: {0}")]
    NonUtf8Root(String),
    /// A `--debug` token was not recognised.
    #[error("invalid --debug value: {0}")]
    DebugFlag(String),
    /// An `--info` token was not recognised.
    #[error("invalid --info value: {0}")]
    InfoFlag(String),
}

/// Everything one invocation needs.
#[derive(Clone, Debug)]
pub(crate) struct CliConfig {
    pub(crate) roots: Vec<String>,
    pub(crate) options: WalkOptions,
    pub(crate) verbosity: VerbosityConfig,
    pub(crate) ignore_errors: bool,
    pub(crate) quiet: bool,
    pub(crate) stats: bool,
    pub(crate) events: bool,
    pub(crate) limit: Option<u64>,
}

impl CliConfig {
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let roots = matches
            .get_many::<OsString>("roots")
            .map(|roots| roots.cloned().map(into_utf8).collect::<Result<Vec<_>, _>>())
            .transpose()?
            .unwrap_or_else(|| vec![".".to_owned()]);

        let mut verbosity = VerbosityConfig::from_verbose_level(matches.get_count("verbose"));
        for token in matches.get_many::<String>("info").into_iter().flatten() {
            verbosity.apply_info_flag(token).map_err(CliError::InfoFlag)?;
        }
        for token in matches.get_many::<String>("debug").into_iter().flatten() {
            verbosity.apply_debug_flag(token).map_err(CliError::DebugFlag)?;
        }

        let flag = |name: &str| matches.get_flag(name);
        let ignore_errors = flag("ignore-errors");
        let quiet = flag("quiet");
        let options = WalkOptions::new()
            .recurse(!flag("no-recurse"))
            .follow_links(flag("follow-links"))
            .visit_once(flag("once"))
            .max_depth(matches.get_one::<usize>("max-depth").copied().unwrap_or(0))
            .directories_only(flag("dirs-only"))
            .files_only(flag("files-only"))
            .ignore_errors(ignore_errors)
            .quiet(quiet)
            .change_directory(flag("chdir"));

        Ok(Self {
            roots,
            options,
            verbosity,
            ignore_errors,
            quiet,
            stats: flag("stats"),
            events: flag("events"),
            limit: matches.get_one::<u64>("limit").copied(),
        })
    }
}

fn into_utf8(root: OsString) -> Result<String, CliError> {
    root.into_string()
        .map_err(|raw| CliError::NonUtf8Root(raw.to_string_lossy().into_owned()))
}
