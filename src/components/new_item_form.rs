//! New Item Form Component
//!
//! Name input plus shop and category selectors.

use leptos::prelude::*;

use crate::catalog::{parse_category_id, parse_shop_id, CATEGORIES, SHOPS};
use crate::store::{store_submit_form, use_app_store, AppStateStoreFields};

/// Placeholder option meaning "nothing selected"
const PLACEHOLDER: &str = "Seçiniz";

/// Form for adding items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_form(&store);
    };

    let selected_shop = move || {
        store.form().read().shop_id.map(|id| id.0.to_string()).unwrap_or_default()
    };
    let selected_category = move || {
        store.form().read().category_id.map(|id| id.0.to_string()).unwrap_or_default()
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <div class="form-group">
                <label for="item-name">"Ürün Adı"</label>
                <input
                    id="item-name"
                    type="text"
                    placeholder="Ürün Adı"
                    prop:value=move || store.form().read().name.clone()
                    on:input=move |ev| {
                        store.form().write().name = event_target_value(&ev);
                    }
                />
            </div>

            <div class="form-group">
                <label for="item-shop">"Market"</label>
                <select
                    id="item-shop"
                    prop:value=selected_shop
                    on:change=move |ev| {
                        store.form().write().shop_id = parse_shop_id(&event_target_value(&ev));
                    }
                >
                    <option value="">{PLACEHOLDER}</option>
                    {SHOPS.iter().map(|shop| view! {
                        <option value=shop.id.0.to_string()>{shop.name}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="item-category">"Kategori"</label>
                <select
                    id="item-category"
                    prop:value=selected_category
                    on:change=move |ev| {
                        store.form().write().category_id = parse_category_id(&event_target_value(&ev));
                    }
                >
                    <option value="">{PLACEHOLDER}</option>
                    {CATEGORIES.iter().map(|category| view! {
                        <option value=category.id.0.to_string()>{category.name}</option>
                    }).collect_view()}
                </select>
            </div>

            <button
                type="submit"
                class=move || if store.form().read().is_complete() { "submit-btn ready" } else { "submit-btn" }
            >
                "Ürün Ekle"
            </button>
        </form>
    }
}
