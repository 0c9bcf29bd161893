//! Posts Page

use leptos::prelude::*;

use crate::api::post_client;
use crate::components::{ListField, ListSeparator, ResourcePage, TextAreaField, TextField};
use crate::controller::PageController;
use crate::models::{Post, Record};

#[component]
pub fn PostsPage() -> impl IntoView {
    let ctrl = PageController::mount(post_client());

    let render_item = Callback::new(move |post: Record<Post>| {
        let id = post.id;
        let Post { title, body, tags, reactions, .. } = post.fields;
        view! {
            <h3>{title}</h3>
            <p class="card-body">{body}</p>
            <div class="tag-row">
                {tags.into_iter().map(|tag| view! { <span class="tag">"#"{tag}</span> }).collect_view()}
            </div>
            <div class="card-meta">
                <span>{format!("{} reactions", reactions)}</span>
                <button
                    class="link-btn"
                    title="Reload from server"
                    disabled=move || ctrl.is_pending(id)
                    on:click=move |_| ctrl.refresh(id)
                >
                    "Reload"
                </button>
            </div>
        }
        .into_any()
    });

    let render_fields = Callback::new(move |(draft, set_draft): (ReadSignal<Post>, WriteSignal<Post>)| {
        let start = draft.get_untracked();
        view! {
            <TextField
                label="Title"
                value=start.title
                required=true
                on_change=move |title: String| set_draft.update(|p| p.title = title)
            />
            <TextAreaField
                label="Content"
                value=start.body
                required=true
                on_change=move |body: String| set_draft.update(|p| p.body = body)
            />
            <ListField
                label="Tags (comma separated)"
                values=start.tags
                separator=ListSeparator::Comma
                on_change={move |tags: Vec<String>| set_draft.update(|p| p.tags = tags)}
            />
        }
        .into_any()
    });

    view! {
        <ResourcePage
            controller=ctrl
            title="Posts"
            render_item=render_item
            render_fields=render_fields
        />
    }
}
