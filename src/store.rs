//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::PendingInput;
use crate::models::ItemId;
use crate::notifier::Transition;
use crate::session::ShoppingSession;

/// Session-scoped UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Shopping list and completion notifier
    pub session: ShoppingSession,
    /// New-item form fields
    pub form: PendingInput,
    /// Number of Idle -> Alerted edges so far; the confetti canvas watches it
    pub celebrations: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add the pending form input as a new item; no-op if a field is missing.
///
/// Only the `session` and `form` fields are written, never the root, so
/// readers of `celebrations` are not woken by a plain submit.
pub fn store_submit_form(store: &AppStore) {
    let mut form = store.form().get_untracked();
    let step = form.submit_into(&mut store.session().write());
    if step.output.is_some() {
        *store.form().write() = form;
    }
    apply_transition(store, step.transition);
}

/// Flip the bought flag of an item by ID
pub fn store_toggle_bought(store: &AppStore, item_id: &ItemId) {
    let step = store.session().write().toggle_bought(item_id);
    apply_transition(store, step.transition);
}

/// Remove an item by ID
pub fn store_delete_item(store: &AppStore, item_id: &ItemId) {
    let step = store.session().write().delete_item(item_id);
    apply_transition(store, step.transition);
}

fn apply_transition(store: &AppStore, transition: Option<Transition>) {
    // The banner reads the notifier directly; only the effect needs a nudge
    if let Some(Transition::Celebrate) = transition {
        *store.celebrations().write() += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use leptos::reactive::effect::ImmediateEffect;

    use super::*;
    use crate::models::{CategoryId, ShopId};

    fn setup_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::default()))
    }

    fn submit(store: &AppStore, name: &str, shop: u32, category: u32) -> ItemId {
        {
            let form_field = store.form();
            let mut form = form_field.write();
            form.name = name.to_string();
            form.shop_id = Some(ShopId(shop));
            form.category_id = Some(CategoryId(category));
        }
        store_submit_form(store);
        store
            .session()
            .read()
            .list()
            .items()
            .last()
            .map(|item| item.id().clone())
            .expect("item added")
    }

    fn celebrations(store: &AppStore) -> u32 {
        store.celebrations().get_untracked()
    }

    fn alerted(store: &AppStore) -> bool {
        store.session().read().notifier().is_alerted()
    }

    #[test]
    fn test_toggle_scenario_counts_each_celebration() {
        let (_owner, store) = setup_store();
        let ekmek = submit(&store, "Ekmek", 1, 5);
        let kalem = submit(&store, "Kalem", 2, 2);
        assert_eq!(store.session().read().list().len(), 2);
        assert_eq!(store.form().get_untracked(), PendingInput::default());
        assert_eq!(celebrations(&store), 0);

        store_toggle_bought(&store, &ekmek);
        assert_eq!(celebrations(&store), 0);
        store_toggle_bought(&store, &kalem);
        assert_eq!(celebrations(&store), 1);
        assert!(alerted(&store));

        // Dismiss does not bump the counter
        store_toggle_bought(&store, &kalem);
        assert_eq!(celebrations(&store), 1);
        assert!(!alerted(&store));

        store_toggle_bought(&store, &kalem);
        assert_eq!(celebrations(&store), 2);
        assert!(alerted(&store));
    }

    #[test]
    fn test_delete_only_bought_item_clears_alert() {
        let (_owner, store) = setup_store();
        let ekmek = submit(&store, "Ekmek", 1, 5);
        store_toggle_bought(&store, &ekmek);
        assert_eq!(celebrations(&store), 1);

        store_delete_item(&store, &ekmek);
        assert!(store.session().read().list().is_empty());
        assert!(!alerted(&store));
        assert_eq!(celebrations(&store), 1);
    }

    #[test]
    fn test_noop_operations_keep_counter() {
        let (_owner, store) = setup_store();
        let ekmek = submit(&store, "Ekmek", 1, 5);
        store_toggle_bought(&store, &ekmek);
        assert_eq!(celebrations(&store), 1);

        store_toggle_bought(&store, &ItemId::generate());
        store_delete_item(&store, &ItemId::generate());
        store_submit_form(&store);
        assert_eq!(celebrations(&store), 1);
        assert!(alerted(&store));

        // A successful add to an incomplete list does not celebrate either
        store_toggle_bought(&store, &ekmek);
        submit(&store, "Kalem", 2, 2);
        assert_eq!(celebrations(&store), 1);
    }

    #[test]
    fn test_failed_submit_keeps_form_fields() {
        let (_owner, store) = setup_store();
        {
            let form_field = store.form();
            let mut form = form_field.write();
            form.name = "Kalem".to_string();
            form.shop_id = Some(ShopId(2));
        }
        let before = store.form().get_untracked();

        store_submit_form(&store);
        assert_eq!(store.form().get_untracked(), before);
        assert!(store.session().read().list().is_empty());
    }

    #[test]
    fn test_empty_submit_does_not_wake_celebration_readers() {
        let (_owner, store) = setup_store();
        let ekmek = submit(&store, "Ekmek", 1, 5);
        store_toggle_bought(&store, &ekmek);

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _effect = ImmediateEffect::new(move || {
            let _ = store.celebrations().get();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_submit_form(&store);
        store_toggle_bought(&store, &ItemId::generate());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
