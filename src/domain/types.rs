//! Domain vocabulary for the profile tree and its views.
//!
//! These small value types keep the core operations explicit: sort state is
//! passed in and returned rather than hidden in UI fields, and color tags
//! live on the data tree rather than in the presentation layer.

use std::fmt;

/// Rank-based highlight assigned to a node among its siblings.
///
/// Tags are computed once per tree build by the colorizer and reflect a
/// node's standing only within its own sibling group, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTag {
    /// Not ranked, or ranked beyond the highlighted tiers.
    #[default]
    None,
    /// Ranks 1-3 by average time within the sibling group.
    TopTier,
    /// Ranks 4-6 by average time within the sibling group.
    SecondTier,
}

/// A sortable column of the profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Profile,
    Count,
    TotalTime,
    Min,
    Max,
    Avg,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 6] =
        [Column::Profile, Column::Count, Column::TotalTime, Column::Min, Column::Max, Column::Avg];

    /// True for metric columns compared numerically; the Profile column
    /// compares node names lexicographically instead.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(self, Column::Profile)
    }

    /// Header title as it appears in the input CSV.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Column::Profile => "Profile",
            Column::Count => "Count",
            Column::TotalTime => "TotalTime",
            Column::Min => "Min",
            Column::Max => "Max",
            Column::Avg => "Avg",
        }
    }

    /// Look a column up by its header title (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.title().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Explicit sort state passed into and returned from the sort operation.
///
/// A header click on the same column toggles `reverse`; a click on a
/// different column resets it to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub reverse: bool,
}

impl Default for SortState {
    /// The stored state before any header click: ascending on `Avg`, so the
    /// load-time sort on `Avg` toggles to descending (slowest first).
    fn default() -> Self {
        SortState { column: Column::Avg, reverse: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup_by_title() {
        assert_eq!(Column::from_name("TotalTime"), Some(Column::TotalTime));
        assert_eq!(Column::from_name("avg"), Some(Column::Avg));
        assert_eq!(Column::from_name("Duration"), None);
    }

    #[test]
    fn test_profile_column_is_not_numeric() {
        assert!(!Column::Profile.is_numeric());
        for column in Column::ALL.into_iter().filter(|c| *c != Column::Profile) {
            assert!(column.is_numeric(), "{column} should be numeric");
        }
    }
}
