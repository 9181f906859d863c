use crate::models::{ItemId, ItemList, ItemState};

use super::view::{EntryView, ListView};

/// Accordion over an ordered item list.
///
/// At most one item is expanded at a time. `toggle` is the only mutation;
/// rendering goes through [`ExpandableList::view`], which is a pure function
/// of the current state.
#[derive(Debug, Clone, Default)]
pub struct ExpandableList {
    items: ItemList,
    expanded_id: Option<ItemId>,
}

impl ExpandableList {
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            expanded_id: None,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn expanded_id(&self) -> Option<ItemId> {
        self.expanded_id
    }

    /// Collapse `id` if it is the expanded item, otherwise expand it and
    /// collapse whatever was open. Unknown ids are accepted; nothing renders
    /// as expanded for them. Returns the new state of `id`.
    pub fn toggle(&mut self, id: ItemId) -> ItemState {
        if self.expanded_id == Some(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id);
        }
        let state = self.state_of(id);
        tracing::debug!("toggle: item {} -> {:?}", id, state);
        state
    }

    pub fn state_of(&self, id: ItemId) -> ItemState {
        if self.expanded_id == Some(id) && self.items.contains(id) {
            ItemState::Expanded
        } else {
            ItemState::Collapsed
        }
    }

    pub fn view(&self) -> ListView<'_> {
        if self.items.is_empty() {
            return ListView::Placeholder;
        }

        let entries = self
            .items
            .iter()
            .map(|item| {
                let state = self.state_of(item.id);
                EntryView {
                    id: item.id,
                    question: &item.question,
                    state,
                    answer: state.is_expanded().then_some(item.answer.as_str()),
                }
            })
            .collect();

        ListView::Entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn two_items() -> ExpandableList {
        let items = ItemList::new(vec![Item::new(1, "A?", "A."), Item::new(2, "B?", "B.")]).unwrap();
        ExpandableList::new(items)
    }

    fn answers<'a>(view: &ListView<'a>) -> Vec<Option<&'a str>> {
        view.entries().iter().map(|e| e.answer).collect()
    }

    #[test]
    fn initial_render_has_everything_collapsed() {
        let list = two_items();
        let view = list.view();
        assert_eq!(list.expanded_id(), None);
        assert!(view
            .entries()
            .iter()
            .all(|e| e.state == ItemState::Collapsed && e.answer.is_none()));
    }

    #[test]
    fn toggle_walks_through_the_two_item_scenario() {
        let mut list = two_items();

        assert_eq!(list.toggle(ItemId(1)), ItemState::Expanded);
        assert_eq!(answers(&list.view()), vec![Some("A."), None]);

        assert_eq!(list.toggle(ItemId(2)), ItemState::Expanded);
        assert_eq!(list.state_of(ItemId(1)), ItemState::Collapsed);
        assert_eq!(answers(&list.view()), vec![None, Some("B.")]);

        assert_eq!(list.toggle(ItemId(2)), ItemState::Collapsed);
        assert_eq!(answers(&list.view()), vec![None, None]);
        assert_eq!(list.expanded_id(), None);
    }

    #[test]
    fn toggle_unknown_id_expands_nothing() {
        let mut list = two_items();
        list.toggle(ItemId(1));

        assert_eq!(list.toggle(ItemId(99)), ItemState::Collapsed);
        assert!(list.view().expanded().is_none());
        assert_eq!(list.state_of(ItemId(1)), ItemState::Collapsed);
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let mut list = ExpandableList::new(ItemList::empty());
        assert!(list.view().is_placeholder());

        list.toggle(ItemId(1));
        assert_eq!(list.view(), ListView::Placeholder);
    }

    #[test]
    fn view_keeps_input_order() {
        let items = ItemList::new(vec![
            Item::new(3, "C?", "C."),
            Item::new(1, "A?", "A."),
            Item::new(2, "B?", "B."),
        ])
        .unwrap();
        let list = ExpandableList::new(items);
        let questions: Vec<&str> = list.view().entries().iter().map(|e| e.question).collect();
        assert_eq!(questions, vec!["C?", "A?", "B?"]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::models::Item;
    use proptest::prelude::*;

    fn list_of(n: u64) -> ExpandableList {
        let items = (0..n)
            .map(|i| Item::new(i, format!("Q{}?", i), format!("A{}.", i)))
            .collect();
        ExpandableList::new(ItemList::new(items).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn at_most_one_item_is_expanded(
            n in 0u64..12,
            toggles in proptest::collection::vec(0u64..16, 0..40)
        ) {
            let mut list = list_of(n);
            for id in toggles {
                list.toggle(ItemId(id));
                let expanded = list
                    .view()
                    .entries()
                    .iter()
                    .filter(|e| e.state.is_expanded())
                    .count();
                prop_assert!(expanded <= 1, "found {} expanded items", expanded);
            }
        }

        #[test]
        fn toggling_twice_restores_collapsed(n in 1u64..12, pick in 0u64..12) {
            let mut list = list_of(n);
            let id = ItemId(pick % n);

            prop_assert_eq!(list.toggle(id), ItemState::Expanded);
            prop_assert_eq!(list.toggle(id), ItemState::Collapsed);
            prop_assert!(list.view().expanded().is_none());
        }

        #[test]
        fn toggle_expands_exactly_the_target(
            n in 1u64..12,
            first in 0u64..12,
            second in 0u64..12
        ) {
            let mut list = list_of(n);
            list.toggle(ItemId(first % n));
            let target = ItemId(second % n);
            if list.expanded_id() != Some(target) {
                list.toggle(target);
                let view = list.view();
                for entry in view.entries() {
                    prop_assert_eq!(entry.state.is_expanded(), entry.id == target);
                }
            }
        }
    }
}
