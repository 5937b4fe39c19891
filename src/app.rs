//! Shopping List App
//!
//! Root component: provides the store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CompletionBanner, ConfettiCanvas, NewItemForm, ShoppingTable};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-container">
            <ConfettiCanvas />

            <h1>"Alışveriş Listesi"</h1>

            <CompletionBanner />

            <NewItemForm />

            <h2>"Alınacak Ürünler"</h2>

            <ShoppingTable />
        </div>
    }
}
