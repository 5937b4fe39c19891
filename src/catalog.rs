//! Reference Catalog
//!
//! Static shop and category tables used to annotate items.

use crate::models::{CategoryId, CategoryRef, ShopId, ShopRef};

/// Display name for ids that are not in the catalog
pub const UNKNOWN_NAME: &str = "Bilinmiyor";

pub const SHOPS: &[ShopRef] = &[
    ShopRef { id: ShopId(1), name: "Migros" },
    ShopRef { id: ShopId(2), name: "Teknosa" },
    ShopRef { id: ShopId(3), name: "BİM" },
];

pub const CATEGORIES: &[CategoryRef] = &[
    CategoryRef { id: CategoryId(1), name: "Elektronik" },
    CategoryRef { id: CategoryId(2), name: "Kırtasiye" },
    CategoryRef { id: CategoryId(3), name: "Oyuncak" },
    CategoryRef { id: CategoryId(4), name: "Bakliyat" },
    CategoryRef { id: CategoryId(5), name: "Fırın" },
];

pub fn shop_name(id: ShopId) -> &'static str {
    SHOPS
        .iter()
        .find(|shop| shop.id == id)
        .map_or(UNKNOWN_NAME, |shop| shop.name)
}

pub fn category_name(id: CategoryId) -> &'static str {
    CATEGORIES
        .iter()
        .find(|category| category.id == id)
        .map_or(UNKNOWN_NAME, |category| category.name)
}

/// Parse a `<select>` value; the empty option and garbage mean no selection
pub fn parse_shop_id(value: &str) -> Option<ShopId> {
    value.trim().parse().ok().map(ShopId)
}

pub fn parse_category_id(value: &str) -> Option<CategoryId> {
    value.trim().parse().ok().map(CategoryId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let shops: Vec<_> = SHOPS.iter().map(|s| s.name).collect();
        assert_eq!(shops, vec!["Migros", "Teknosa", "BİM"]);

        let categories: Vec<_> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            categories,
            vec!["Elektronik", "Kırtasiye", "Oyuncak", "Bakliyat", "Fırın"]
        );
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(shop_name(ShopId(3)), "BİM");
        assert_eq!(category_name(CategoryId(5)), "Fırın");
        assert_eq!(shop_name(ShopId(0)), UNKNOWN_NAME);
        assert_eq!(category_name(CategoryId(6)), UNKNOWN_NAME);
    }

    #[test]
    fn test_parse_select_values() {
        assert_eq!(parse_shop_id("2"), Some(ShopId(2)));
        assert_eq!(parse_shop_id(""), None);
        assert_eq!(parse_category_id("abc"), None);
        assert_eq!(parse_category_id("4"), Some(CategoryId(4)));
    }
}
