//! Quotes Page

use leptos::prelude::*;

use crate::api::quote_client;
use crate::components::{ResourcePage, TextAreaField, TextField};
use crate::controller::PageController;
use crate::models::{Quote, Record};

#[component]
pub fn QuotesPage() -> impl IntoView {
    let ctrl = PageController::mount(quote_client());

    let render_item = Callback::new(|quote: Record<Quote>| {
        let Quote { quote, author } = quote.fields;
        view! {
            <blockquote class="quote-text">"\u{201c}"{quote}"\u{201d}"</blockquote>
            <p class="quote-author">"\u{2014} "{author}</p>
        }
        .into_any()
    });

    let render_fields = Callback::new(|(draft, set_draft): (ReadSignal<Quote>, WriteSignal<Quote>)| {
        let start = draft.get_untracked();
        view! {
            <TextAreaField
                label="Quote"
                value=start.quote
                required=true
                on_change=move |text: String| set_draft.update(|q| q.quote = text)
            />
            <TextField
                label="Author"
                value=start.author
                required=true
                on_change=move |author: String| set_draft.update(|q| q.author = author)
            />
        }
        .into_any()
    });

    view! {
        <ResourcePage
            controller=ctrl
            title="Quotes"
            render_item=render_item
            render_fields=render_fields
        />
    }
}
