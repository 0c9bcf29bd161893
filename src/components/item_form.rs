//! Item Form Component
//!
//! Create/edit form around a locally held draft.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::Draft;

/// Form over a draft of `F`.
///
/// Field edits stay in a local signal until Save; Cancel drops them. A new
/// `initial` value rebuilds the form from scratch.
#[component]
pub fn ItemForm<F>(
    #[prop(into)] initial: Signal<Draft<F>>,
    #[prop(into)] title: Signal<String>,
    /// Receives the current draft and its setter
    #[prop(into)]
    render_fields: Callback<(ReadSignal<F>, WriteSignal<F>), AnyView>,
    #[prop(into)] on_submit: Callback<Draft<F>>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView
where
    F: Clone + Send + Sync + 'static,
{
    view! {
        <div class="item-form">
            <h2>{move || title.get()}</h2>
            {move || {
                let start = initial.get();
                let id = start.id;
                let (draft, set_draft) = signal(start.fields);

                let handle_submit = move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(Draft {
                        id,
                        fields: draft.get_untracked(),
                    });
                };

                view! {
                    <form class="item-form-body" on:submit=handle_submit>
                        {untrack(|| render_fields.run((draft, set_draft)))}
                        <div class="form-actions">
                            <button
                                type="button"
                                class="cancel-btn"
                                disabled=move || submitting.get()
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="save-btn" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                }
            }}
        </div>
    }
}
