// Navigation tree model - the static forest of sections the sidebar walks

use thiserror::Error;

/// Construction-time validation failure. The chapter index is fixed
/// configuration, so these abort startup instead of surfacing at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("duplicate sibling key `{key}` under `{parent}`")]
    DuplicateKey { parent: String, key: String },
}

/// A node in the navigation forest: either a selectable page leaf or a
/// collapsible group of further nodes. Groups may nest to arbitrary depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavNode {
    Page {
        title: String,
        key: String,
    },
    Group {
        title: String,
        key: String,
        children: Vec<NavNode>,
    },
}

impl NavNode {
    pub fn page(title: &str, key: &str) -> Self {
        NavNode::Page {
            title: title.to_string(),
            key: key.to_string(),
        }
    }

    pub fn group(title: &str, key: &str, children: Vec<NavNode>) -> Self {
        NavNode::Group {
            title: title.to_string(),
            key: key.to_string(),
            children,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            NavNode::Page { key, .. } | NavNode::Group { key, .. } => key,
        }
    }
}

/// Top-level navigation unit, e.g. "Attacker".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub key: String,
    pub children: Vec<NavNode>,
}

impl Section {
    pub fn new(title: &str, key: &str, children: Vec<NavNode>) -> Self {
        Self {
            title: title.to_string(),
            key: key.to_string(),
            children,
        }
    }
}

/// The full chapter index: an ordered sequence of sections, validated once at
/// startup and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavIndex {
    sections: Vec<Section>,
}

impl NavIndex {
    /// Builds the index, rejecting duplicate sibling keys anywhere in the
    /// forest. Keys only need to be unique among siblings; lookups are always
    /// scoped by the ancestor path.
    pub fn new(sections: Vec<Section>) -> Result<Self, NavError> {
        check_sibling_keys("<root>", sections.iter().map(|s| s.key.as_str()))?;
        for section in &sections {
            validate_children(&section.key, &section.children)?;
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

fn validate_children(parent: &str, children: &[NavNode]) -> Result<(), NavError> {
    check_sibling_keys(parent, children.iter().map(NavNode::key))?;
    for node in children {
        if let NavNode::Group { key, children, .. } = node {
            validate_children(&format!("{parent}/{key}"), children)?;
        }
    }
    Ok(())
}

fn check_sibling_keys<'a>(
    parent: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), NavError> {
    let mut seen: Vec<&str> = Vec::new();
    for key in keys {
        if seen.contains(&key) {
            return Err(NavError::DuplicateKey {
                parent: parent.to_string(),
                key: key.to_string(),
            });
        }
        seen.push(key);
    }
    Ok(())
}

/// Expansion-state address of a group: the owning section's key followed by
/// the full key path down to the group, slash-joined. Using the whole path
/// keeps nested groups with the same leaf key at distinct addresses.
pub fn group_identity(section_key: &str, path: &[&str]) -> String {
    let mut identity = String::from(section_key);
    for key in path {
        identity.push('/');
        identity.push_str(key);
    }
    identity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_index() -> Vec<Section> {
        vec![
            Section::new(
                "Get Started",
                "start",
                vec![
                    NavNode::page("Introduction", "Introduction"),
                    NavNode::page("Installation", "Installation"),
                ],
            ),
            Section::new(
                "Attacker",
                "attacker",
                vec![NavNode::group(
                    "Attack Methods",
                    "attack-methods",
                    vec![NavNode::page("Pair", "Pair")],
                )],
            ),
        ]
    }

    #[test]
    fn valid_index_passes_validation() {
        assert!(NavIndex::new(small_index()).is_ok());
    }

    #[test]
    fn duplicate_section_keys_are_rejected() {
        let sections = vec![
            Section::new("A", "start", vec![]),
            Section::new("B", "start", vec![]),
        ];
        assert_eq!(
            NavIndex::new(sections),
            Err(NavError::DuplicateKey {
                parent: "<root>".to_string(),
                key: "start".to_string(),
            })
        );
    }

    #[test]
    fn duplicate_keys_in_nested_group_are_rejected() {
        let sections = vec![Section::new(
            "Attacker",
            "attacker",
            vec![NavNode::group(
                "Methods",
                "methods",
                vec![
                    NavNode::page("Pair", "Pair"),
                    NavNode::group("Pair", "Pair", vec![]),
                ],
            )],
        )];
        assert_eq!(
            NavIndex::new(sections),
            Err(NavError::DuplicateKey {
                parent: "attacker/methods".to_string(),
                key: "Pair".to_string(),
            })
        );
    }

    #[test]
    fn same_key_in_different_parents_is_fine() {
        let sections = vec![
            Section::new("A", "a", vec![NavNode::page("Overview", "Overview")]),
            Section::new("B", "b", vec![NavNode::page("Overview", "Overview")]),
        ];
        assert!(NavIndex::new(sections).is_ok());
    }

    #[test]
    fn empty_group_is_tolerated() {
        let sections = vec![Section::new(
            "A",
            "a",
            vec![NavNode::group("Empty", "empty", vec![])],
        )];
        assert!(NavIndex::new(sections).is_ok());
    }

    #[test]
    fn group_identity_uses_full_key_path() {
        assert_eq!(group_identity("attacker", &[]), "attacker");
        assert_eq!(
            group_identity("attacker", &["attack-methods"]),
            "attacker/attack-methods"
        );
        // Same leaf key at different depths resolves to different addresses.
        assert_eq!(
            group_identity("attacker", &["attack-methods", "llm"]),
            "attacker/attack-methods/llm"
        );
        assert_ne!(
            group_identity("attacker", &["llm"]),
            group_identity("attacker", &["attack-methods", "llm"])
        );
    }
}
