//! Notice Tray Component
//!
//! Stack of transient notices; every failed request ends up here.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields, NoticeKind};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-tray" aria-live="polite">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Info => "notice notice-info",
                        NoticeKind::Error => "notice notice-error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice-message">{notice.message}</span>
                            <button
                                class="notice-dismiss"
                                title="Dismiss"
                                on:click=move |_| store_dismiss_notice(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
