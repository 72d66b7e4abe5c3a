// Selection state - the single active chapter

/// The currently selected (section, page) pair. `page = None` means the
/// section's overview page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveChapter {
    pub section: String,
    pub page: Option<String>,
}

impl ActiveChapter {
    pub fn new(section: &str, page: Option<&str>) -> Self {
        Self {
            section: section.to_string(),
            page: page.map(str::to_string),
        }
    }
}

/// Holds exactly one active chapter for the life of the process. Mutated only
/// through `select_chapter`; no validation against the tree happens here -
/// unknown keys surface later as a content resolution failure.
pub struct SelectionState {
    active: ActiveChapter,
}

impl SelectionState {
    pub fn new(active: ActiveChapter) -> Self {
        Self { active }
    }

    pub fn active(&self) -> &ActiveChapter {
        &self.active
    }

    /// Unconditionally replaces the active chapter (last-write-wins).
    pub fn select_chapter(&mut self, section: &str, page: Option<&str>) {
        self.active = ActiveChapter::new(section, page);
    }

    /// Whether the given sidebar link is the active one. Compares both keys,
    /// so a same-keyed page in another section never lights up.
    pub fn is_active(&self, section_key: &str, page_key: &str) -> bool {
        self.active.section == section_key && self.active.page.as_deref() == Some(page_key)
    }
}
