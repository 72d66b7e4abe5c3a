// Expansion state - which sidebar groups are currently unfolded

use std::collections::HashMap;

/// Mapping from group identity (see `nav::group_identity`) to expanded flag.
/// Absent keys are collapsed; the key space only ever grows as the user
/// toggles groups.
#[derive(Debug, Default)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the state with a set of pre-expanded group identities.
    pub fn with_expanded(identities: impl IntoIterator<Item = String>) -> Self {
        Self {
            expanded: identities.into_iter().map(|id| (id, true)).collect(),
        }
    }

    pub fn is_expanded(&self, identity: &str) -> bool {
        self.expanded.get(identity).copied().unwrap_or(false)
    }

    /// Flips the flag for a group, treating absent as collapsed so the first
    /// toggle expands. Never touches the active chapter.
    pub fn toggle_group(&mut self, identity: &str) {
        let flag = self.expanded.entry(identity.to_string()).or_insert(false);
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_groups_are_collapsed() {
        let state = ExpansionState::new();
        assert!(!state.is_expanded("attacker/attack-methods"));
    }

    #[test]
    fn first_toggle_expands() {
        let mut state = ExpansionState::new();
        state.toggle_group("attacker/attack-methods");
        assert!(state.is_expanded("attacker/attack-methods"));
    }

    #[test]
    fn toggle_pairs_are_idempotent() {
        let mut state = ExpansionState::with_expanded(["defender/defend-methods".to_string()]);
        for identity in ["attacker/attack-methods", "defender/defend-methods"] {
            let before = state.is_expanded(identity);
            state.toggle_group(identity);
            state.toggle_group(identity);
            assert_eq!(state.is_expanded(identity), before);
        }
    }

    #[test]
    fn seeded_groups_start_expanded() {
        let state = ExpansionState::with_expanded(["attacker/attack-methods".to_string()]);
        assert!(state.is_expanded("attacker/attack-methods"));
        assert!(!state.is_expanded("attacker/attack-methods/llm"));
    }
}
