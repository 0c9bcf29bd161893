//! Resource Page Component
//!
//! Shared layout for every CRUD page: header with "Add New", then either the
//! loading/error panel, the card list, or the form.

use leptos::prelude::*;

use super::{ErrorPanel, ItemForm, ItemList, LoadingPanel};
use crate::controller::{PageController, PageView};
use crate::models::{Record, Resource};

/// "post" -> "Post"
pub fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn ResourceHeader(
    #[prop(into)] title: String,
    #[prop(into)] add_label: String,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="resource-header">
            <h1>{title}</h1>
            <button class="add-btn" disabled=move || disabled.get() on:click=move |_| on_add.run(())>
                {add_label}
            </button>
        </div>
    }
}

/// One resource page wired to its controller.
///
/// # Arguments
/// * `title` - Plural heading, e.g. "Posts"
/// * `visible` - Items to list instead of the whole collection (filtered views)
/// * `toolbar` / `footer` - Rendered above/below the list while listing
#[component]
pub fn ResourcePage<F>(
    controller: PageController<F>,
    title: &'static str,
    #[prop(into)] render_item: Callback<Record<F>, AnyView>,
    #[prop(into)] render_fields: Callback<(ReadSignal<F>, WriteSignal<F>), AnyView>,
    #[prop(optional, into)] visible: Option<Signal<Vec<Record<F>>>>,
    #[prop(optional, into)] toolbar: Option<ViewFn>,
    #[prop(optional, into)] footer: Option<ViewFn>,
) -> impl IntoView
where
    F: Resource,
{
    let noun = capitalized(F::LABEL);
    let items = visible.unwrap_or_else(|| controller.items());
    let page_view = controller.view();
    let draft = controller.draft();
    let submitting = controller.is_submitting();

    let form_title = {
        let noun = noun.clone();
        Signal::derive(move || match draft.get().id {
            Some(_) => format!("Edit {}", noun),
            None => format!("Create New {}", noun),
        })
    };
    let header_busy = Signal::derive(move || page_view.get() == PageView::Editing);

    let content = move || match page_view.get() {
        PageView::Loading => view! {
            <LoadingPanel message=format!("Loading {}...", title.to_lowercase()) />
        }
        .into_any(),
        PageView::Failed(message) => view! {
            <ErrorPanel message=message on_retry=move |_| controller.load() />
        }
        .into_any(),
        PageView::Listing => view! {
            {toolbar.as_ref().map(|toolbar| toolbar.run())}
            <ItemList<Record<F>>
                items=items
                title=format!("All {}", title)
                render_item=render_item
                on_edit=move |record| controller.open_edit(record)
                on_delete=move |record| controller.delete(record)
                is_busy=Callback::new(move |id| controller.is_pending(id))
            />
            {footer.as_ref().map(|footer| footer.run())}
        }
        .into_any(),
        PageView::Editing => view! {
            <ItemForm<F>
                initial=draft
                title=form_title
                render_fields=render_fields
                on_submit=move |draft| controller.submit(draft)
                on_cancel=move |_| controller.cancel()
                submitting=submitting
            />
        }
        .into_any(),
    };

    view! {
        <section class="resource-page">
            <ResourceHeader
                title=title
                add_label=format!("Add New {}", noun)
                on_add=move |_| controller.open_create()
                disabled=header_busy
            />
            {content}
        </section>
    }
}
