use crate::models::{ItemId, ItemState};

/// One row of a rendered accordion. `answer` is only present when expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub id: ItemId,
    pub question: &'a str,
    pub state: ItemState,
    pub answer: Option<&'a str>,
}

/// Declarative render output consumed by a surface (terminal UI or text renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a> {
    /// The list has no items; surfaces show a placeholder instead of rows.
    Placeholder,
    Entries(Vec<EntryView<'a>>),
}

impl<'a> ListView<'a> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListView::Placeholder)
    }

    pub fn entries(&self) -> &[EntryView<'a>] {
        match self {
            ListView::Placeholder => &[],
            ListView::Entries(entries) => entries.as_slice(),
        }
    }

    pub fn expanded(&self) -> Option<&EntryView<'a>> {
        self.entries().iter().find(|e| e.state.is_expanded())
    }
}
