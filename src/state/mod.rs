pub mod expansion;
pub mod selection;

pub use expansion::ExpansionState;
pub use selection::{ActiveChapter, SelectionState};

#[cfg(test)]
mod tests {
    use super::*;

    // The two state cells only ever change through their own transition.
    #[test]
    fn selection_and_expansion_are_independent() {
        let mut selection = SelectionState::new(ActiveChapter::new("start", Some("Introduction")));
        let mut expansion = ExpansionState::new();

        expansion.toggle_group("attacker/attack-methods");
        assert_eq!(
            selection.active(),
            &ActiveChapter::new("start", Some("Introduction"))
        );

        selection.select_chapter("attacker", Some("Pair"));
        assert!(expansion.is_expanded("attacker/attack-methods"));
        assert!(!expansion.is_expanded("defender/defend-methods"));
    }
}
