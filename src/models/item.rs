use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an FAQ entry. Unique within an [`ItemList`](super::ItemList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub question: String,
    pub answer: String,
}

impl Item {
    pub fn new(id: u64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    #[default]
    Collapsed,
    Expanded,
}

impl ItemState {
    pub fn is_expanded(&self) -> bool {
        matches!(self, ItemState::Expanded)
    }
}
