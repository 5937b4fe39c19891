//! UI Components
//!
//! Reusable Leptos components.

mod completion_banner;
mod confetti_canvas;
mod item_row;
mod new_item_form;
mod shopping_table;

pub use completion_banner::CompletionBanner;
pub use confetti_canvas::ConfettiCanvas;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use shopping_table::ShoppingTable;
