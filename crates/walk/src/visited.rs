use platform::DirIdentity;
use rustc_hash::FxHashSet;

/// Physical directories already entered during a walk.
///
/// Identities are stable for the lifetime of the walk: device and inode on
/// Unix, the canonical path elsewhere. A set may be shared across several
/// walks so that no directory is entered twice in total.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: FxHashSet<DirIdentity>,
}

impl VisitedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `identity`, returning `false` if it was already present.
    pub fn insert(&mut self, identity: DirIdentity) -> bool {
        self.seen.insert(identity)
    }

    /// Reports whether `identity` has been recorded.
    #[must_use]
    pub fn contains(&self, identity: &DirIdentity) -> bool {
        self.seen.contains(identity)
    }

    /// Number of distinct directories recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
