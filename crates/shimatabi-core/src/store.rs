//! In-memory itinerary state store.
//!
//! A plain, framework-free store owning the day sequence and the edit-mode
//! flag. The rendering layer wraps it in a reactive signal and drives it
//! through the two mutation entry points; nothing here persists across a
//! page reload.

use tracing::warn;

use crate::itinerary::DayRecord;

/// Owns the ordered day records and the global edit-mode flag.
///
/// Two states exist, `view` and `edit`, toggled only by explicit user
/// action. The day sequence is never reordered, grown, or shrunk; the only
/// mutation is replacing one record's activity text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItineraryStore {
    days: Vec<DayRecord>,
    edit_mode: bool,
}

impl ItineraryStore {
    /// Create a store over a fixed day sequence, starting in view mode.
    pub fn new(days: Vec<DayRecord>) -> Self {
        Self {
            days,
            edit_mode: false,
        }
    }

    /// The ordered day records.
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Whether edit mode is active.
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Flip between view and edit mode. Total; never fails.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    /// Replace the activity text of the record at `index`.
    ///
    /// Builds a fresh record sequence with the single record swapped out,
    /// so observers comparing values see exactly one changed record and all
    /// others unchanged. Returns whether the update was applied; an
    /// out-of-range index is a logged no-op (and a `debug_assert!` in debug
    /// builds), never a panic for the end user.
    pub fn update_activity(&mut self, index: usize, text: impl Into<String>) -> bool {
        debug_assert!(index < self.days.len(), "day index {index} out of range");

        if index >= self.days.len() {
            warn!(index, len = self.days.len(), "ignoring out-of-range activity update");
            return false;
        }

        let text = text.into();
        self.days = self
            .days
            .iter()
            .enumerate()
            .map(|(i, day)| {
                if i == index {
                    let mut updated = day.clone();
                    updated.activities = text.clone();
                    updated
                } else {
                    day.clone()
                }
            })
            .collect();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::six_day_plan;

    #[test]
    fn test_initial_state() {
        let store = ItineraryStore::new(six_day_plan());
        assert_eq!(store.days().len(), 6);
        assert!(!store.edit_mode());

        let ids: Vec<&str> = store.days().iter().map(|d| d.day.as_str()).collect();
        assert_eq!(ids, ["D1", "D2", "D3", "D4", "D5", "D6"]);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut store = ItineraryStore::new(six_day_plan());
        let before = store.edit_mode();

        store.toggle_edit_mode();
        assert_ne!(store.edit_mode(), before);

        store.toggle_edit_mode();
        assert_eq!(store.edit_mode(), before);
    }

    #[test]
    fn test_update_activity_replaces_exactly_one_field() {
        for index in 0..6 {
            let mut store = ItineraryStore::new(six_day_plan());
            let original = store.days().to_vec();

            assert!(store.update_activity(index, "改动后的安排"));
            assert_eq!(store.days()[index].activities, "改动后的安排");

            for (i, day) in store.days().iter().enumerate() {
                if i == index {
                    // Every field but activities is untouched.
                    assert_eq!(day.day, original[i].day);
                    assert_eq!(day.route, original[i].route);
                    assert_eq!(day.accommodation, original[i].accommodation);
                    assert_eq!(day.transport, original[i].transport);
                    assert_eq!(day.is_editable, original[i].is_editable);
                } else {
                    assert_eq!(day, &original[i]);
                }
            }
        }
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "out of range"))]
    fn test_update_activity_out_of_range() {
        let mut store = ItineraryStore::new(six_day_plan());
        let before = store.clone();

        // Release builds: a no-op. Debug builds: the debug_assert fires.
        assert!(!store.update_activity(6, "不存在的一天"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_edit_scenario_end_to_end() {
        let mut store = ItineraryStore::new(six_day_plan());
        assert!(!store.edit_mode());

        store.toggle_edit_mode();
        assert!(store.edit_mode());

        assert!(store.update_activity(2, "新的活动安排"));
        assert_eq!(store.days()[2].activities, "新的活动安排");

        store.toggle_edit_mode();
        assert!(!store.edit_mode());
        // Leaving edit mode does not revert the edit.
        assert_eq!(store.days()[2].activities, "新的活动安排");
    }

    #[test]
    fn test_update_preserves_order() {
        let mut store = ItineraryStore::new(six_day_plan());
        store.update_activity(0, "x");
        store.update_activity(5, "y");

        let ids: Vec<&str> = store.days().iter().map(|d| d.day.as_str()).collect();
        assert_eq!(ids, ["D1", "D2", "D3", "D4", "D5", "D6"]);
    }
}
