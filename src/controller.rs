//! Page Controller
//!
//! Reactive owner of one resource's collection. Bridges the resource client
//! and the list/form views, and reports every failed request to the notice
//! tray.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use crate::api::ResourceClient;
use crate::models::{Draft, Record, Resource};
use crate::page_state::{PageState, Phase, Target};
use crate::store::{store_notify_error, store_notify_info, use_app_store, AppStore};

/// Coarse view of [`Phase`] for switching page content
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Failed(String),
    Listing,
    Editing,
}

pub struct PageController<F: Resource> {
    state: RwSignal<PageState<F>>,
    client: StoredValue<ResourceClient<F>, LocalStorage>,
    store: AppStore,
}

impl<F: Resource> Clone for PageController<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Resource> Copy for PageController<F> {}

impl<F: Resource> PageController<F> {
    pub fn new(client: ResourceClient<F>) -> Self {
        let state = RwSignal::new(PageState::new());
        Self {
            state,
            client: StoredValue::new_local(client),
            store: use_app_store(),
        }
    }

    /// Create the controller and start the initial fetch
    pub fn mount(client: ResourceClient<F>) -> Self {
        let controller = Self::new(client);
        controller.load();
        controller
    }

    // ========================
    // Derived signals
    // ========================

    pub fn items(&self) -> Signal<Vec<Record<F>>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.items.clone())).into()
    }

    pub fn view(&self) -> Signal<PageView> {
        let state = self.state;
        Memo::new(move |_| {
            state.with(|s| match &s.phase {
                Phase::Loading => PageView::Loading,
                Phase::Failed(message) => PageView::Failed(message.clone()),
                Phase::Listing => PageView::Listing,
                Phase::Editing(_) => PageView::Editing,
            })
        })
        .into()
    }

    /// The draft the form starts from; only changes when a new one is supplied
    pub fn draft(&self) -> Signal<Draft<F>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.draft().cloned().unwrap_or_default())).into()
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_submitting())).into()
    }

    /// Read one field of record `id` (tracked); `None` once it is gone
    pub fn with_record<R>(&self, id: u32, f: impl FnOnce(&F) -> R) -> Option<R> {
        self.state.with(|s| s.get(id).map(|record| f(&record.fields)))
    }

    /// Whether `id` has a delete/patch/refresh in flight (tracked)
    pub fn is_pending(&self, id: u32) -> bool {
        self.state.with(|s| s.is_pending(id))
    }

    // ========================
    // Intents
    // ========================

    /// Fetch the collection (on mount, and as the retry action)
    pub fn load(&self) {
        let state = self.state;
        let client = self.client.get_value();
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = client.list().await;
            match &result {
                Ok(items) => {
                    log::info!(target: "controller", "Loaded {} {}s", items.len(), F::LABEL)
                }
                Err(e) => log::error!(target: "controller", "Error fetching {}s: {}", F::LABEL, e),
            }
            state.update(|s| s.finish_load(result.map_err(|e| e.to_string())));
        });
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create(F::default()));
    }

    pub fn open_edit(&self, record: Record<F>) {
        let found = self.state.try_update(|s| s.open_edit(record.id)).unwrap_or(false);
        if !found {
            log::warn!(target: "controller", "{} #{} is no longer in the collection", F::LABEL, record.id);
        }
    }

    pub fn cancel(&self) {
        self.state.update(|s| s.cancel());
    }

    /// Create or update depending on whether the draft carries an id
    pub fn submit(&self, draft: Draft<F>) {
        let Some(Some(ticket)) = self.state.try_update(|s| s.begin_submit()) else {
            log::debug!(target: "controller", "Ignoring submit while another is in flight");
            return;
        };

        let fields = draft.fields.clone().normalized();
        let state = self.state;
        let store = self.store;

        match state.with_untracked(|s| s.target(draft.id)) {
            Target::Create => {
                let client = self.client.get_value();
                spawn_local(async move {
                    match client.create(&fields).await {
                        Ok(echo) => match state.try_update(|s| s.finish_create(ticket, echo)).flatten() {
                            Some(id) => {
                                log::info!(target: "controller", "Created {} #{}", F::LABEL, id);
                                store_notify_info(&store, format!("Created {} #{}", F::LABEL, id));
                            }
                            None => {
                                log::debug!(target: "controller", "Dropping create echo for a closed form")
                            }
                        },
                        Err(e) => {
                            log::error!(target: "controller", "Error creating {}: {}", F::LABEL, e);
                            state.update(|s| {
                                s.end_submit(ticket, Err(draft));
                            });
                            store_notify_error(&store, format!("Could not create {}: {}", F::LABEL, e));
                        }
                    }
                });
            }
            Target::Local(id) => {
                log::debug!(target: "controller", "{} #{} exists only locally; updating in place", F::LABEL, id);
                state.update(|s| {
                    s.finish_update(ticket, id, fields);
                });
            }
            Target::Remote(id) => {
                let client = self.client.get_value();
                spawn_local(async move {
                    let result = client.update(id, &fields).await;
                    match result {
                        Ok(echo) => {
                            log::debug!(target: "controller", "Update echo for {} #{}: {:?}", F::LABEL, id, echo.id);
                            let applied = state
                                .try_update(|s| s.finish_update(ticket, id, fields))
                                .unwrap_or(false);
                            if applied {
                                store_notify_info(&store, format!("Saved {} #{}", F::LABEL, id));
                            }
                        }
                        Err(e) => {
                            log::error!(target: "controller", "Error updating {} #{}: {}", F::LABEL, id, e);
                            state.update(|s| {
                                s.end_submit(ticket, Err(draft));
                            });
                            store_notify_error(&store, format!("Could not save {} #{}: {}", F::LABEL, id, e));
                        }
                    }
                });
            }
        }
    }

    /// Ask for confirmation, then delete
    pub fn delete(&self, record: Record<F>) {
        let prompt = format!("Are you sure you want to delete \"{}\"?", record.summary());
        if !confirm(&prompt) {
            return;
        }

        let id = record.id;
        let Some(true) = self.state.try_update(|s| s.begin_mutation(id)) else {
            log::debug!(target: "controller", "{} #{} already has a request in flight", F::LABEL, id);
            return;
        };

        let state = self.state;
        let store = self.store;

        if let Target::Local(id) = state.with_untracked(|s| s.target(Some(id))) {
            state.update(|s| {
                s.finish_delete(id);
            });
            return;
        }

        let client = self.client.get_value();
        spawn_local(async move {
            match client.delete(id).await {
                Ok(()) => {
                    log::info!(target: "controller", "Deleted {} #{}", F::LABEL, id);
                    state.update(|s| {
                        s.finish_delete(id);
                    });
                }
                Err(e) => {
                    log::error!(target: "controller", "Error deleting {} #{}: {}", F::LABEL, id, e);
                    state.update(|s| s.end_mutation(id));
                    store_notify_error(&store, format!("Could not delete {} #{}: {}", F::LABEL, id, e));
                }
            }
        });
    }

    /// Send a partial update that bypasses the form; `apply` mirrors it locally on success
    pub fn patch<B>(&self, id: u32, body: B, apply: impl FnOnce(&mut F) + 'static)
    where
        B: Serialize + 'static,
    {
        let Some(true) = self.state.try_update(|s| s.begin_mutation(id)) else {
            log::debug!(target: "controller", "{} #{} already has a request in flight", F::LABEL, id);
            return;
        };

        let state = self.state;
        let store = self.store;

        if let Target::Local(id) = state.with_untracked(|s| s.target(Some(id))) {
            state.update(|s| {
                s.finish_patch(id, apply);
            });
            return;
        }

        let client = self.client.get_value();
        spawn_local(async move {
            match client.update(id, &body).await {
                Ok(_) => state.update(|s| {
                    s.finish_patch(id, apply);
                }),
                Err(e) => {
                    log::error!(target: "controller", "Error patching {} #{}: {}", F::LABEL, id, e);
                    state.update(|s| s.end_mutation(id));
                    store_notify_error(&store, format!("Could not update {} #{}: {}", F::LABEL, id, e));
                }
            }
        });
    }

    /// Re-read one record from the service, discarding local edits to it
    pub fn refresh(&self, id: u32) {
        let state = self.state;
        let store = self.store;

        if state.with_untracked(|s| s.is_local(id)) {
            store_notify_info(&store, format!("{} #{} exists only in this session", F::LABEL, id));
            return;
        }
        let Some(true) = state.try_update(|s| s.begin_mutation(id)) else {
            return;
        };

        let client = self.client.get_value();
        spawn_local(async move {
            match client.get_by_id(id).await {
                Ok(record) => state.update(|s| {
                    s.finish_patch(id, |fields| *fields = record.fields);
                }),
                Err(e) => {
                    log::error!(target: "controller", "Error fetching {} #{}: {}", F::LABEL, id, e);
                    state.update(|s| s.end_mutation(id));
                    store_notify_error(&store, format!("Could not reload {} #{}: {}", F::LABEL, id, e));
                }
            }
        });
    }
}

/// Blocking browser confirmation; a missing window counts as "no"
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
