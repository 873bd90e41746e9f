/// Counters accumulated across one or more walks.
///
/// The caller owns the value and may pass the same instance to several walks
/// to aggregate totals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkStatistics {
    /// Directories that were opened successfully.
    pub directories_visited: u64,
    /// Errors counted, whether or not they were tolerated.
    pub errors_encountered: u64,
    /// Entries delivered to the visitor.
    pub entries_processed: u64,
}

impl WalkStatistics {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directories_visited: 0,
            errors_encountered: 0,
            entries_processed: 0,
        }
    }
}
