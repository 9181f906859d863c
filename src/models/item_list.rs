use std::collections::HashMap;
use thiserror::Error;

use super::{Item, ItemId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemListError {
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// Ordered collection of items with an id index.
///
/// Iteration order is insertion order and is never re-sorted. The index maps
/// each id to its position so lookups by id do not scan the list.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Result<Self, ItemListError> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(ItemListError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, index })
    }

    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn get_index(&self, pos: usize) -> Option<&Item> {
        self.items.get(pos)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
