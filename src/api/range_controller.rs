use crate::core::RangeSelection;

/// Owns the active date range of the selector.
///
/// Exactly one range is active at a time; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeController {
    active: RangeSelection,
}

impl RangeController {
    #[must_use]
    pub fn new(initial: RangeSelection) -> Self {
        Self { active: initial }
    }

    #[must_use]
    pub fn active(self) -> RangeSelection {
        self.active
    }

    /// Selector position to highlight.
    #[must_use]
    pub fn active_index(self) -> usize {
        self.active.index()
    }

    #[must_use]
    pub fn options(self) -> [RangeSelection; 6] {
        RangeSelection::ALL
    }

    /// Activates `range`, returning whether the selection changed.
    pub fn select(&mut self, range: RangeSelection) -> bool {
        let changed = self.active != range;
        self.active = range;
        changed
    }
}
