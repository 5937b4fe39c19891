//! Item Row Component
//!
//! One table row with bought/delete actions.

use leptos::prelude::*;

use crate::catalog::{category_name, shop_name};
use crate::models::Item;
use crate::store::{store_delete_item, store_toggle_bought, use_app_store, AppStateStoreFields};

/// A single item row in the shopping table
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id().clone();
    let toggle_id = id.clone();
    let delete_id = id.clone();

    // Only the bought flag can change while the row lives
    let bought = Memo::new(move |_| {
        store
            .session()
            .read()
            .list()
            .get(&id)
            .is_some_and(Item::is_bought)
    });

    let cell_class = move || if bought.get() { "bought" } else { "" };

    view! {
        <tr class=move || if bought.get() { "item-row table-success" } else { "item-row" }>
            <td class=cell_class>{item.name().to_string()}</td>
            <td class=cell_class>{shop_name(item.shop_id())}</td>
            <td class=cell_class>{category_name(item.category_id())}</td>
            <td class=cell_class>{move || if bought.get() { "Alındı" } else { "Alınacak" }}</td>
            <td class="actions">
                <button
                    class=move || if bought.get() { "btn undo-btn" } else { "btn buy-btn" }
                    on:click=move |_| store_toggle_bought(&store, &toggle_id)
                >
                    {move || if bought.get() { "Geri Al" } else { "Satın Al" }}
                </button>
                <button class="btn delete-btn" on:click=move |_| store_delete_item(&store, &delete_id)>
                    "Sil"
                </button>
            </td>
        </tr>
    }
}
