//! Item List Component
//!
//! Card grid over any collection of entities.

use leptos::prelude::*;

use crate::models::Entity;

/// Renders `items` in the order given, one card each, with Edit/Delete buttons.
///
/// # Arguments
/// * `render_item` - Card body for one entity
/// * `on_edit` / `on_delete` - Invoked with the card's entity
/// * `is_busy` - Optional per-id flag that disables both buttons
#[component]
pub fn ItemList<T>(
    #[prop(into)] items: Signal<Vec<T>>,
    #[prop(into)] title: String,
    #[prop(into)] render_item: Callback<T, AnyView>,
    #[prop(into)] on_edit: Callback<T>,
    #[prop(into)] on_delete: Callback<T>,
    #[prop(optional, into)] is_busy: Option<Callback<u32, bool>>,
) -> impl IntoView
where
    T: Entity + Clone + Send + Sync + 'static,
{
    view! {
        <div class="item-list">
            <h2>{title}</h2>
            {move || {
                let records = items.get();
                if records.is_empty() {
                    return view! { <p class="empty-state">"No items found."</p> }.into_any();
                }
                view! {
                    <div class="card-grid">
                        {records.into_iter().map(|record| {
                            let id = record.id();
                            let busy = move || is_busy.map(|f| f.run(id)).unwrap_or(false);
                            let edit_target = record.clone();
                            let delete_target = record.clone();
                            view! {
                                <div class="card" data-id=id.to_string()>
                                    {render_item.run(record)}
                                    <div class="card-actions">
                                        <button
                                            class="edit-btn"
                                            disabled=busy
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            disabled=busy
                                            on:click=move |_| on_delete.run(delete_target.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
