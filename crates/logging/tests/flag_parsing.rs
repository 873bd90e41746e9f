//! Integration tests for `--info`/`--debug` token parsing and `-v` mapping.
//!
//! Tokens take the form `name[N]`; a missing level means 1. The keywords
//! `all` and `none` apply to every flag of the category.

use logging::{DebugFlag, InfoFlag, VerbosityConfig, apply_debug_flag, current, init};

// ============================================================================
// Token Parsing
// ============================================================================

#[test]
fn flag_without_level_defaults_to_one() {
    let mut config = VerbosityConfig::default();
    config.apply_debug_flag("dup").unwrap();
    assert_eq!(config.debug.get(DebugFlag::Dup), 1);
    assert_eq!(config.debug.get(DebugFlag::Walk), 0);
}

#[test]
fn flag_with_level_sets_that_level() {
    let mut config = VerbosityConfig::default();
    config.apply_debug_flag("stat3").unwrap();
    config.apply_info_flag("skip2").unwrap();
    assert_eq!(config.debug.get(DebugFlag::Stat), 3);
    assert_eq!(config.info.get(InfoFlag::Skip), 2);
}

#[test]
fn later_tokens_override_earlier_ones() {
    let mut config = VerbosityConfig::default();
    for token in ["walk2", "walk0", "walk"] {
        config.apply_debug_flag(token).unwrap();
    }
    assert_eq!(config.debug.get(DebugFlag::Walk), 1);
}

#[test]
fn all_and_none_cover_every_flag() {
    let mut config = VerbosityConfig::default();
    config.apply_debug_flag("all2").unwrap();
    assert!(DebugFlag::ALL.iter().all(|flag| config.debug.get(*flag) == 2));

    config.apply_debug_flag("none").unwrap();
    assert_eq!(config.max_level(), 0);

    config.apply_info_flag("all").unwrap();
    assert!(InfoFlag::ALL.iter().all(|flag| config.info.get(*flag) == 1));
}

#[test]
fn malformed_tokens_are_rejected() {
    let mut config = VerbosityConfig::default();
    assert!(config.apply_debug_flag("").is_err());
    assert!(config.apply_debug_flag("2walk").is_err());
    assert!(config.apply_debug_flag("walk999").is_err());
    assert!(config.apply_debug_flag("flist").is_err());
    assert!(config.apply_info_flag("walk").is_err());
    assert_eq!(config, VerbosityConfig::default());
}

#[test]
fn thread_local_tokens_apply_to_current_config() {
    init(VerbosityConfig::default());
    apply_debug_flag("chdir2").unwrap();
    assert_eq!(current().debug.get(DebugFlag::Chdir), 2);
}

// ============================================================================
// Verbose Level Mapping
// ============================================================================

#[test]
fn verbose_levels_are_cumulative() {
    let mut previous = VerbosityConfig::from_verbose_level(0);
    for level in 1..=6 {
        let config = VerbosityConfig::from_verbose_level(level);
        for flag in DebugFlag::ALL {
            assert!(config.debug.get(flag) >= previous.debug.get(flag), "{flag:?} at -v{level}");
        }
        for flag in InfoFlag::ALL {
            assert!(config.info.get(flag) >= previous.info.get(flag), "{flag:?} at -v{level}");
        }
        previous = config;
    }
}

#[test]
fn single_verbose_enables_statistics_only() {
    let config = VerbosityConfig::from_verbose_level(1);
    assert_eq!(config.info.get(InfoFlag::Stats), 1);
    assert_eq!(config.info.get(InfoFlag::Skip), 0);
    assert_eq!(config.max_level(), 1);
    assert!(DebugFlag::ALL.iter().all(|flag| config.debug.get(*flag) == 0));
}
