//! Group visibility state.
//!
//! # Invariants
//! - Groups keep first-seen order from the loaded cards.
//! - Group names are unique.
//! - At least one group stays enabled; disabling the last one is undone.

use super::{DeckError, DeckResult};
use log::warn;
use serde::{Deserialize, Serialize};

/// Visibility flag for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    pub name: String,
    pub enabled: bool,
}

/// Ordered group-name to enabled mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSet {
    groups: Vec<GroupState>,
}

impl GroupSet {
    /// Collects distinct names in first-seen order, all enabled.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut groups: Vec<GroupState> = Vec::new();
        for name in names {
            if groups.iter().any(|group| group.name == name) {
                continue;
            }
            groups.push(GroupState {
                name: name.to_string(),
                enabled: true,
            });
        }
        Self { groups }
    }

    pub fn as_slice(&self) -> &[GroupState] {
        &self.groups
    }

    /// Unknown groups are reported as disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.groups
            .iter()
            .any(|group| group.name == name && group.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.groups.iter().filter(|group| group.enabled).count()
    }

    /// Sets one group's flag and returns its effective state.
    ///
    /// Disabling the last enabled group leaves it enabled and returns `true`.
    ///
    /// # Errors
    /// - Returns `DeckError::UnknownGroup` for names outside the set.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> DeckResult<bool> {
        let index = self
            .groups
            .iter()
            .position(|group| group.name == name)
            .ok_or_else(|| DeckError::UnknownGroup(name.to_string()))?;

        self.groups[index].enabled = enabled;
        if self.enabled_count() == 0 {
            self.groups[index].enabled = true;
            warn!(
                "event=group_toggle module=deck status=corrected group={} reason=last_enabled",
                name
            );
        }
        Ok(self.groups[index].enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::GroupSet;
    use crate::deck::DeckError;

    #[test]
    fn from_names_dedups_in_first_seen_order() {
        let groups = GroupSet::from_names(["b", "a", "b", "c", "a"]);
        let names = groups
            .as_slice()
            .iter()
            .map(|group| group.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(groups.as_slice().iter().all(|group| group.enabled));
    }

    #[test]
    fn disabling_last_enabled_group_is_corrected() {
        let mut groups = GroupSet::from_names(["x", "y"]);
        assert!(!groups.set_enabled("x", false).unwrap());
        assert!(groups.set_enabled("y", false).unwrap());
        assert!(groups.is_enabled("y"));
        assert_eq!(groups.enabled_count(), 1);
    }

    #[test]
    fn re_enabling_group_succeeds() {
        let mut groups = GroupSet::from_names(["x", "y"]);
        groups.set_enabled("x", false).unwrap();
        assert!(groups.set_enabled("x", true).unwrap());
        assert_eq!(groups.enabled_count(), 2);
    }

    #[test]
    fn unknown_group_is_rejected_without_side_effects() {
        let mut groups = GroupSet::from_names(["x"]);
        let err = groups.set_enabled("missing", false).unwrap_err();
        assert_eq!(err, DeckError::UnknownGroup("missing".to_string()));
        assert!(groups.is_enabled("x"));
        assert!(!groups.is_enabled("missing"));
        assert_eq!(groups.as_slice().len(), 1);
    }
}
