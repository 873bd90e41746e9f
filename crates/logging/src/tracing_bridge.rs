//! crates/logging/src/tracing_bridge.rs
//! Installs a `tracing` subscriber that agrees with the verbosity flags.
//!
//! `debug_log!` and `info_log!` forward their messages to `tracing` under the
//! `treewalk` target when this feature is enabled. [`init_tracing`] stores the
//! [`VerbosityConfig`] for the current thread and installs a formatting
//! subscriber on stderr whose default filter follows the highest configured
//! level. `RUST_LOG` overrides the derived filter.

use super::config::VerbosityConfig;
use super::levels::DebugFlag;
use super::thread_local::init;
use tracing_subscriber::EnvFilter;

/// Filter directive derived from the configured levels.
///
/// Debug flags forward through `tracing::debug!`, so any enabled debug flag
/// opens the filter to at least `debug`.
#[must_use]
pub fn default_directive(config: &VerbosityConfig, quiet: bool) -> &'static str {
    let debug = DebugFlag::ALL
        .into_iter()
        .map(|flag| config.debug.get(flag))
        .max()
        .unwrap_or(0);
    match (debug, config.max_level()) {
        (0, 0) if quiet => "error",
        (0, 0) => "warn",
        (0, _) => "info",
        (1..=3, _) => "debug",
        _ => "trace",
    }
}

/// Initializes the per-thread verbosity and a global `tracing` subscriber.
///
/// Returns `false` when a global subscriber had already been installed; the
/// verbosity configuration is applied either way.
pub fn init_tracing(config: VerbosityConfig, quiet: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config, quiet)));
    init(config);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_follows_max_level() {
        assert_eq!(default_directive(&VerbosityConfig::default(), false), "warn");
        assert_eq!(default_directive(&VerbosityConfig::default(), true), "error");
        assert_eq!(
            default_directive(&VerbosityConfig::from_verbose_level(1), false),
            "info"
        );
        assert_eq!(
            default_directive(&VerbosityConfig::from_verbose_level(3), true),
            "debug"
        );
        assert_eq!(
            default_directive(&VerbosityConfig::from_verbose_level(4), false),
            "debug"
        );
        assert_eq!(
            default_directive(&VerbosityConfig::from_verbose_level(6), false),
            "trace"
        );
    }

    #[test]
    fn single_debug_flag_opens_debug_level() {
        let mut config = VerbosityConfig::default();
        config.debug.dup = 1;
        assert_eq!(default_directive(&config, true), "debug");
    }

    #[test]
    fn init_tracing_applies_thread_config() {
        let mut config = VerbosityConfig::default();
        config.debug.walk = 2;
        init_tracing(config, false);
        assert!(crate::debug_gte(crate::DebugFlag::Walk, 2));
    }
}
