//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Entries skipped by filters, depth limits or duplicate detection.
    Skip,
    /// Walk statistics.
    Stats,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 2] = [Self::Skip, Self::Stats];

    /// Token used for this flag in `--info` style options.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Stats => "stats",
        }
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Logical current-directory changes.
    Chdir,
    /// Directory open, enter and close events.
    Dir,
    /// Duplicate directory detection.
    Dup,
    /// Entry kind resolution through status queries.
    Stat,
    /// Per-entry traversal.
    Walk,
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 5] = [Self::Chdir, Self::Dir, Self::Dup, Self::Stat, Self::Walk];

    /// Token used for this flag in `--debug` style options.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chdir => "chdir",
            Self::Dir => "dir",
            Self::Dup => "dup",
            Self::Stat => "stat",
            Self::Walk => "walk",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Skipped entries level.
    pub skip: u8,
    /// Walk statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Stats => self.stats = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Logical cwd changes level.
    pub chdir: u8,
    /// Directory events level.
    pub dir: u8,
    /// Duplicate detection level.
    pub dup: u8,
    /// Kind resolution level.
    pub stat: u8,
    /// Per-entry traversal level.
    pub walk: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Chdir => self.chdir,
            DebugFlag::Dir => self.dir,
            DebugFlag::Dup => self.dup,
            DebugFlag::Stat => self.stat,
            DebugFlag::Walk => self.walk,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Chdir => self.chdir = level,
            DebugFlag::Dir => self.dir = level,
            DebugFlag::Dup => self.dup = level,
            DebugFlag::Stat => self.stat = level,
            DebugFlag::Walk => self.walk = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }
}
