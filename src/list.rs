//! List Manager
//!
//! Ordered shopping list with add / toggle / delete and the completion predicate.
//! Invalid input and unknown ids are silent no-ops.

use crate::models::{CategoryId, Item, ItemId, NewItem, ShopId};

/// Items in display (insertion) order. Ids are unique within the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    items: Vec<Item>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn bought_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_bought()).count()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append a new item, or do nothing if a field is missing
    pub fn add_item(
        &mut self,
        name: &str,
        shop_id: Option<ShopId>,
        category_id: Option<CategoryId>,
    ) -> Option<Item> {
        match NewItem::parse(name, shop_id, category_id) {
            Ok(draft) => Some(self.push(draft)),
            Err(err) => {
                log::debug!("[LIST] add ignored: {}", err);
                None
            }
        }
    }

    fn push(&mut self, draft: NewItem) -> Item {
        let item = Item::new(draft);
        debug_assert!(self.get(item.id()).is_none(), "duplicate item id");
        log::info!("[LIST] added {} ({})", item.name(), item.id());
        self.items.push(item.clone());
        item
    }

    /// Flip the bought flag of the matching item; returns whether one matched
    pub fn toggle_bought(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.toggle_bought();
                log::debug!("[LIST] {} bought={}", id, item.is_bought());
                true
            }
            None => {
                log::debug!("[LIST] toggle ignored: unknown id {}", id);
                false
            }
        }
    }

    /// Remove the matching item, keeping the order of the rest
    pub fn delete_item(&mut self, id: &ItemId) -> Option<Item> {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            log::debug!("[LIST] delete ignored: unknown id {}", id);
            return None;
        };
        let removed = self.items.remove(index);
        log::info!("[LIST] deleted {} ({})", removed.name(), id);
        Some(removed)
    }

    pub fn is_complete(&self) -> bool {
        is_list_complete(&self.items)
    }
}

/// True iff the list is non-empty and every item is bought
pub fn is_list_complete(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(Item::is_bought)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(names: &[&str]) -> ListState {
        let mut list = ListState::new();
        for name in names {
            list.add_item(name, Some(ShopId(1)), Some(CategoryId(1)))
                .expect("valid item");
        }
        list
    }

    fn ids(list: &ListState) -> Vec<ItemId> {
        list.items().iter().map(|item| item.id().clone()).collect()
    }

    #[test]
    fn test_add_appends_unbought_item() {
        let mut list = list_with(&["Ekmek"]);
        let added = list
            .add_item("Kalem", Some(ShopId(2)), Some(CategoryId(2)))
            .unwrap();

        assert_eq!(list.len(), 2);
        assert!(!added.is_bought());
        assert_eq!(list.items()[1], added);
    }

    #[test]
    fn test_add_with_missing_field_is_noop() {
        let mut list = list_with(&["Ekmek"]);
        let before = list.clone();

        assert!(list.add_item("", Some(ShopId(1)), Some(CategoryId(1))).is_none());
        assert!(list.add_item("Kalem", None, Some(CategoryId(1))).is_none());
        assert!(list.add_item("Kalem", Some(ShopId(1)), None).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = list_with(&["a", "b", "c"]);
        let target = list.items()[1].id().clone();

        assert!(list.toggle_bought(&target));
        let flags: Vec<bool> = list.items().iter().map(Item::is_bought).collect();
        assert_eq!(flags, vec![false, true, false]);

        assert!(list.toggle_bought(&target));
        assert_eq!(list.bought_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = list_with(&["a", "b"]);
        let before = list.clone();

        assert!(!list.toggle_bought(&ItemId::generate()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = list_with(&["a", "b", "c"]);
        let all = ids(&list);

        let removed = list.delete_item(&all[1]).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(ids(&list), vec![all[0].clone(), all[2].clone()]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = list_with(&["a"]);
        let before = list.clone();

        assert!(list.delete_item(&ItemId::generate()).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_completion_predicate() {
        assert!(!is_list_complete(&[]));

        let mut list = list_with(&["a"]);
        let first = list.items()[0].id().clone();
        list.toggle_bought(&first);
        assert!(list.is_complete());

        list.add_item("b", Some(ShopId(1)), Some(CategoryId(1)));
        assert!(!list.is_complete());
    }
}
