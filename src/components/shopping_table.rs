//! Shopping Table Component
//!
//! Lists items in insertion order, or a hint when the list is empty.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShoppingTable() -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || store.session().read().list().is_empty();
    let items = move || store.session().read().list().items().to_vec();
    let summary = move || {
        let session = store.session().read();
        format!("{}/{} alındı", session.list().bought_count(), session.list().len())
    };

    view! {
        <div class="table-container">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-hint">"Henüz ürün eklenmedi."</p> }
            >
                <table class="shopping-table">
                    <thead>
                        <tr>
                            <th>"Ürün Adı"</th>
                            <th>"Market"</th>
                            <th>"Kategori"</th>
                            <th>"Durum"</th>
                            <th>"İşlemler"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=items
                            key=|item| item.id().clone()
                            children=move |item| view! { <ItemRow item=item /> }
                        />
                    </tbody>
                </table>
                <p class="item-count">{summary}</p>
            </Show>
        </div>
    }
}
