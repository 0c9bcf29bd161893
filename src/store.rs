//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a notice stays up before dismissing itself
pub const NOTICE_TTL_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message shown in the notice tray
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Notices currently on screen, oldest first
    pub notices: Vec<Notice>,
    /// Id handed to the next notice
    pub next_notice_id: u64,
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

/// Push a notice that stays until dismissed
pub fn store_push_notice(store: &AppStore, kind: NoticeKind, message: impl Into<String>) -> u64 {
    let id = {
        let field = store.next_notice_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.notices().write().push(Notice {
        id,
        kind,
        message: message.into(),
    });
    id
}

/// Push a notice and schedule its dismissal
pub fn store_notify(store: &AppStore, kind: NoticeKind, message: impl Into<String>) -> u64 {
    let id = store_push_notice(store, kind, message);
    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        store_dismiss_notice(&store, id);
    });
    id
}

pub fn store_notify_error(store: &AppStore, message: impl Into<String>) -> u64 {
    store_notify(store, NoticeKind::Error, message)
}

pub fn store_notify_info(store: &AppStore, message: impl Into<String>) -> u64 {
    store_notify(store, NoticeKind::Info, message)
}

/// Remove a notice by ID (no-op if it is already gone)
pub fn store_dismiss_notice(store: &AppStore, notice_id: u64) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}
