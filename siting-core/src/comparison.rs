//! Bounded selection of sites for side-by-side comparison.
//!
//! Membership is toggled one id at a time. Insertion order is kept so the
//! comparison table's columns stay stable, and a full set rejects additions
//! instead of evicting an earlier pick.

/// Result of [`ComparisonSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ToggleOutcome {
    /// The id was absent and has been appended.
    Added,
    /// The id was present and has been removed.
    Removed,
    /// The id was absent but the set is full; nothing changed.
    CapacityReached,
}

impl ToggleOutcome {
    /// Report whether the toggle changed the set.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::CapacityReached)
    }
}

/// Ordered set of at most [`ComparisonSet::CAPACITY`] site ids.
///
/// # Examples
/// ```
/// use siting_core::{ComparisonSet, ToggleOutcome};
///
/// let mut set = ComparisonSet::default();
/// for id in ["a", "b", "c"] {
///     assert!(set.toggle(id).is_accepted());
/// }
/// assert_eq!(set.toggle("d"), ToggleOutcome::CapacityReached);
/// assert_eq!(set.ids(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonSet {
    ids: Vec<String>,
}

impl ComparisonSet {
    /// Maximum number of sites compared at once.
    pub const CAPACITY: usize = 3;

    /// Remove `id` if present, otherwise append it when there is room.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        let position = self.ids.iter().position(|member| member == id);
        let outcome = match position {
            Some(pos) => {
                self.ids.remove(pos);
                ToggleOutcome::Removed
            }
            None if self.is_full() => ToggleOutcome::CapacityReached,
            None => {
                self.ids.push(id.to_owned());
                ToggleOutcome::Added
            }
        };
        log::debug!(
            "comparison toggle '{id}': {outcome:?} ({} of {})",
            self.ids.len(),
            Self::CAPACITY
        );
        outcome
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Member ids in insertion order.
    #[must_use]
    pub const fn ids(&self) -> &[String] {
        self.ids.as_slice()
    }

    /// Report whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|member| member == id)
    }

    /// Number of selected sites.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Report whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Report whether further additions would be rejected.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.ids.len() >= Self::CAPACITY
    }
}
