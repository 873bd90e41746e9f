//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a `-v` count.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.info.stats = 1;
        }
        if level >= 2 {
            config.info.skip = 1;
            config.debug.dir = 1;
            config.debug.dup = 1;
        }
        if level >= 3 {
            config.info.skip = 2;
            config.debug.chdir = 1;
            config.debug.walk = 1;
        }
        if level >= 4 {
            config.debug.dir = 2;
            config.debug.stat = 1;
            config.debug.walk = 2;
        }
        if level >= 5 {
            config.debug.set_all(level - 2);
        }

        config
    }

    /// Apply a single info flag token (e.g., "skip2", "stats", "all", "none").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => self.info.set_all(level),
            "none" => self.info.set_all(0),
            _ => {
                let flag = InfoFlag::ALL
                    .into_iter()
                    .find(|flag| flag.name() == name)
                    .ok_or_else(|| format!("unknown info flag: {name}"))?;
                self.info.set(flag, level);
            }
        }
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "walk2", "dup", "all", "none").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => self.debug.set_all(level),
            "none" => self.debug.set_all(0),
            _ => {
                let flag = DebugFlag::ALL
                    .into_iter()
                    .find(|flag| flag.name() == name)
                    .ok_or_else(|| format!("unknown debug flag: {name}"))?;
                self.debug.set(flag, level);
            }
        }
        Ok(())
    }

    /// Highest level configured for any flag.
    pub fn max_level(&self) -> u8 {
        let info = InfoFlag::ALL.into_iter().map(|flag| self.info.get(flag));
        let debug = DebugFlag::ALL.into_iter().map(|flag| self.debug.get(flag));
        info.chain(debug).max().unwrap_or(0)
    }
}

/// Parse a flag token like "walk2" into ("walk", 2) or "dup" into ("dup", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verbose_level_0() {
        assert_eq!(VerbosityConfig::from_verbose_level(0), VerbosityConfig::default());
    }

    #[test]
    fn test_from_verbose_level_1() {
        let config = VerbosityConfig::from_verbose_level(1);
        assert_eq!(config.info.stats, 1);
        assert_eq!(config.info.skip, 0);
        assert_eq!(config.debug, DebugLevels::default());
    }

    #[test]
    fn test_from_verbose_level_3() {
        let config = VerbosityConfig::from_verbose_level(3);
        assert_eq!(config.info.skip, 2);
        assert_eq!(config.debug.dir, 1);
        assert_eq!(config.debug.walk, 1);
        assert_eq!(config.debug.chdir, 1);
        assert_eq!(config.debug.stat, 0);
    }

    #[test]
    fn test_from_verbose_level_5_and_higher() {
        let config = VerbosityConfig::from_verbose_level(6);
        assert!(DebugFlag::ALL.iter().all(|flag| config.debug.get(*flag) == 4));
    }

    #[test]
    fn test_parse_flag_token() {
        assert_eq!(parse_flag_token("walk").unwrap(), ("walk", 1));
        assert_eq!(parse_flag_token("walk2").unwrap(), ("walk", 2));
        assert_eq!(parse_flag_token("dir10").unwrap(), ("dir", 10));
        assert!(parse_flag_token("").is_err());
        assert!(parse_flag_token("3").is_err());
        assert!(parse_flag_token("walk999").is_err());
    }

    #[test]
    fn test_apply_debug_flag() {
        let mut config = VerbosityConfig::default();
        config.apply_debug_flag("dup2").unwrap();
        assert_eq!(config.debug.dup, 2);

        config.apply_debug_flag("all3").unwrap();
        assert!(DebugFlag::ALL.iter().all(|flag| config.debug.get(*flag) == 3));

        config.apply_debug_flag("none").unwrap();
        assert_eq!(config.debug, DebugLevels::default());

        let error = config.apply_debug_flag("proto").unwrap_err();
        assert!(error.contains("unknown debug flag"));
    }

    #[test]
    fn test_apply_info_flag() {
        let mut config = VerbosityConfig::default();
        config.apply_info_flag("skip").unwrap();
        assert_eq!(config.info.skip, 1);
        assert!(config.apply_info_flag("copy").is_err());
    }

    #[test]
    fn max_level_tracks_highest_flag() {
        let mut config = VerbosityConfig::default();
        assert_eq!(config.max_level(), 0);
        config.debug.stat = 3;
        config.info.stats = 1;
        assert_eq!(config.max_level(), 3);
    }
}
