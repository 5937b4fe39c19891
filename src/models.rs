//! Frontend Models
//!
//! Shopping-list entities and the validated draft used to create them.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Unique identifier of a list item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Allocate a fresh, collision-resistant identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a shop in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShopId(pub u32);

/// Identifier of a category in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u32);

/// Static shop lookup entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopRef {
    pub id: ShopId,
    pub name: &'static str,
}

/// Static category lookup entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: &'static str,
}

/// Why a draft could not become an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("item name is empty")]
    EmptyName,
    #[error("no shop selected")]
    MissingShop,
    #[error("no category selected")]
    MissingCategory,
}

/// Input that passed validation and can be appended to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    shop_id: ShopId,
    category_id: CategoryId,
}

impl NewItem {
    /// Validate raw form input.
    ///
    /// Only presence is checked: any selected shop or category id is accepted,
    /// even one missing from the catalog.
    pub fn parse(
        name: &str,
        shop_id: Option<ShopId>,
        category_id: Option<CategoryId>,
    ) -> Result<Self, DraftError> {
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        let shop_id = shop_id.ok_or(DraftError::MissingShop)?;
        let category_id = category_id.ok_or(DraftError::MissingCategory)?;
        Ok(Self {
            name: name.to_string(),
            shop_id,
            category_id,
        })
    }
}

/// One shopping-list entry.
///
/// Everything except the bought flag is fixed at creation; the flag is only
/// flipped through [`crate::list::ListState::toggle_bought`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    shop_id: ShopId,
    category_id: CategoryId,
    is_bought: bool,
}

impl Item {
    /// Create a not-yet-bought item with a fresh id
    pub fn new(draft: NewItem) -> Self {
        Self {
            id: ItemId::generate(),
            name: draft.name,
            shop_id: draft.shop_id,
            category_id: draft.category_id,
            is_bought: false,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shop_id(&self) -> ShopId {
        self.shop_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn is_bought(&self) -> bool {
        self.is_bought
    }

    pub(crate) fn toggle_bought(&mut self) {
        self.is_bought = !self.is_bought;
    }
}
