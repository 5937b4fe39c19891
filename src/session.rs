//! Shopping Session
//!
//! Owns the list and the completion notifier. Every mutation runs
//! mutate list -> recompute predicate -> evaluate notifier, in that order.

use crate::list::ListState;
use crate::models::{CategoryId, Item, ItemId, ShopId};
use crate::notifier::{CompletionNotifier, Transition};

/// Result of a session operation plus the notifier edge it caused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    pub output: T,
    pub transition: Option<Transition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingSession {
    list: ListState,
    notifier: CompletionNotifier,
}

impl ShoppingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn notifier(&self) -> &CompletionNotifier {
        &self.notifier
    }

    pub fn add_item(
        &mut self,
        name: &str,
        shop_id: Option<ShopId>,
        category_id: Option<CategoryId>,
    ) -> Step<Option<Item>> {
        let output = self.list.add_item(name, shop_id, category_id);
        self.settle(output)
    }

    pub fn toggle_bought(&mut self, id: &ItemId) -> Step<bool> {
        let output = self.list.toggle_bought(id);
        self.settle(output)
    }

    pub fn delete_item(&mut self, id: &ItemId) -> Step<Option<Item>> {
        let output = self.list.delete_item(id);
        self.settle(output)
    }

    fn settle<T>(&mut self, output: T) -> Step<T> {
        let complete = self.list.is_complete();
        let transition = self.notifier.observe(complete);
        Step { output, transition }
    }
}
