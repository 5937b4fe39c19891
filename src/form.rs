//! Pending Form Input
//!
//! Fields of the new-item form. Reset only after a successful add.

use crate::models::{CategoryId, Item, ShopId};
use crate::session::{ShoppingSession, Step};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    pub name: String,
    pub shop_id: Option<ShopId>,
    pub category_id: Option<CategoryId>,
}

impl PendingInput {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.shop_id.is_some() && self.category_id.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Try to add the pending item to `session`; clears the fields on success
    pub fn submit_into(&mut self, session: &mut ShoppingSession) -> Step<Option<Item>> {
        let step = session.add_item(&self.name, self.shop_id, self.category_id);
        if step.output.is_some() {
            self.reset();
        } else {
            log::debug!("[FORM] submit ignored, fields kept");
        }
        step
    }
}
