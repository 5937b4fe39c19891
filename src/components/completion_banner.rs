//! Completion Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shown while the completion notifier is alerted
#[component]
pub fn CompletionBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.session().read().notifier().is_alerted()>
            <div class="completion-banner" role="alert">"Alışveriş Tamamlandı! 🎉"</div>
        </Show>
    }
}
