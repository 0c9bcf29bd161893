//! Comments Page
//!
//! Searchable, sortable, paginated view over the comments collection.
//! The backing service can be switched; each switch mounts a fresh board.

use std::cmp::Ordering;

use leptos::prelude::*;

use crate::api::{comment_client, CommentSource};
use crate::components::{NumberField, ResourcePage, SelectField, TextAreaField, TextField};
use crate::controller::PageController;
use crate::models::{Comment, Record};
use crate::query::{matches_text, paginate};

pub const COMMENTS_PER_PAGE: usize = 10;

const SOURCE_OPTIONS: &[&str] = &["DummyJSON", "JSONPlaceholder"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    #[default]
    Oldest,
    Newest,
    ByPost,
    ByAuthor,
}

impl CommentSort {
    pub const ALL: [CommentSort; 4] = [
        CommentSort::Oldest,
        CommentSort::Newest,
        CommentSort::ByPost,
        CommentSort::ByAuthor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommentSort::Oldest => "Oldest first",
            CommentSort::Newest => "Newest first",
            CommentSort::ByPost => "Post ID",
            CommentSort::ByAuthor => "Author",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.label() == label)
            .unwrap_or_default()
    }

    /// Ties fall back to id order
    pub fn compare(&self, a: &Record<Comment>, b: &Record<Comment>) -> Ordering {
        match self {
            CommentSort::Oldest => a.id.cmp(&b.id),
            CommentSort::Newest => b.id.cmp(&a.id),
            CommentSort::ByPost => a.post_id.cmp(&b.post_id).then(a.id.cmp(&b.id)),
            CommentSort::ByAuthor => a
                .author()
                .to_lowercase()
                .cmp(&b.author().to_lowercase())
                .then(a.id.cmp(&b.id)),
        }
    }
}

fn source_from_label(label: &str) -> CommentSource {
    CommentSource::ALL
        .into_iter()
        .find(|source| source.label() == label)
        .unwrap_or_default()
}

/// Search hits the body and the author line
pub fn comment_matches(comment: &Record<Comment>, needle: &str) -> bool {
    let author = comment.author();
    matches_text([comment.body.as_str(), author.as_str()], needle)
}

fn optional_text(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn CommentsPage() -> impl IntoView {
    let (source, set_source) = signal(CommentSource::default());

    view! {
        <div class="comments-page">
            <div class="source-picker">
                <SelectField
                    label="Source"
                    options=SOURCE_OPTIONS
                    value=source.get_untracked().label()
                    on_change=move |label: String| {
                        let next = source_from_label(&label);
                        log::info!(target: "app", "comments source -> {}", next.label());
                        set_source.set(next);
                    }
                />
            </div>
            {move || view! { <CommentBoard source=source.get() /> }}
        </div>
    }
}

#[component]
fn CommentBoard(source: CommentSource) -> impl IntoView {
    let ctrl = PageController::mount(comment_client(source));

    let (search, set_search) = signal(String::new());
    let (sort, set_sort) = signal(CommentSort::default());
    let (page, set_page) = signal(1usize);

    let all = ctrl.items();
    let slice = Memo::new(move |_| {
        let needle = search.get();
        let order = sort.get();
        let page = page.get();
        all.with(|items| {
            paginate(
                items,
                |comment| comment_matches(comment, &needle),
                |a, b| order.compare(a, b),
                page,
                COMMENTS_PER_PAGE,
            )
        })
    });
    let visible = Signal::derive(move || slice.with(|s| s.items.clone()));

    let toolbar = move || {
        view! {
            <div class="list-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search comments..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
                <select
                    class="sort-select"
                    on:change=move |ev| set_sort.set(CommentSort::from_label(&event_target_value(&ev)))
                >
                    {CommentSort::ALL.iter().map(|option| {
                        let option = *option;
                        view! {
                            <option value=option.label() selected=move || sort.get() == option>
                                {option.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        }
    };

    let footer = move || {
        let current = move || slice.with(|s| s.page);
        let total = move || slice.with(|s| s.total_pages);
        view! {
            <div class="pager">
                <button
                    disabled={move || current() <= 1}
                    on:click=move |_| set_page.set(current().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pager-status">
                    {move || format!(
                        "Page {} of {} ({} matching)",
                        current(),
                        total(),
                        slice.with(|s| s.total_matches),
                    )}
                </span>
                <button
                    disabled={move || current() >= total()}
                    on:click=move |_| set_page.set((current() + 1).min(total()))
                >
                    "Next"
                </button>
            </div>
        }
    };

    let render_item = Callback::new(|comment: Record<Comment>| {
        let author = comment.author();
        let Comment { body, post_id, .. } = comment.fields;
        view! {
            <div class="comment-author">{author}</div>
            <p class="card-body">{body}</p>
            <p class="card-meta">{format!("Post ID: {}", post_id)}</p>
        }
        .into_any()
    });

    let render_fields = Callback::new(move |(draft, set_draft): (ReadSignal<Comment>, WriteSignal<Comment>)| {
        let start = draft.get_untracked();
        let contact = (source == CommentSource::JsonPlaceholder).then(|| {
            view! {
                <TextField
                    label="Name"
                    value=start.name.clone().unwrap_or_default()
                    on_change=move |name: String| set_draft.update(|c| c.name = optional_text(name))
                />
                <TextField
                    label="Email"
                    value=start.email.clone().unwrap_or_default()
                    on_change=move |email: String| set_draft.update(|c| c.email = optional_text(email))
                />
            }
        });
        view! {
            <TextAreaField
                label="Comment"
                value=start.body
                required=true
                on_change=move |body: String| set_draft.update(|c| c.body = body)
            />
            <NumberField
                label="Post ID"
                value=start.post_id
                min=1
                on_change=move |post_id: u32| set_draft.update(|c| c.post_id = post_id)
            />
            {contact}
        }
        .into_any()
    });

    view! {
        <ResourcePage
            controller=ctrl
            title="Comments"
            render_item=render_item
            render_fields=render_fields
            visible=visible
            toolbar=toolbar
            footer=footer
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CommentUser;

    fn comment(id: u32, post_id: u32, username: &str, body: &str) -> Record<Comment> {
        Record::new(
            id,
            Comment {
                body: body.to_string(),
                post_id,
                user: Some(CommentUser { id, username: username.to_string() }),
                ..Comment::default()
            },
        )
    }

    fn sample() -> Vec<Record<Comment>> {
        (1..=25)
            .map(|id| comment(id, 26 - id, if id % 2 == 0 { "bob" } else { "alice" }, &format!("note {}", id)))
            .collect()
    }

    #[test]
    fn test_sort_labels_round_trip() {
        for sort in CommentSort::ALL {
            assert_eq!(CommentSort::from_label(sort.label()), sort);
        }
        assert_eq!(CommentSort::from_label("bogus"), CommentSort::Oldest);
    }

    #[test]
    fn test_source_options_match_sources() {
        let labels: Vec<&str> = CommentSource::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, SOURCE_OPTIONS);
        assert_eq!(source_from_label("JSONPlaceholder"), CommentSource::JsonPlaceholder);
    }

    #[test]
    fn test_search_matches_body_and_author() {
        let c = comment(1, 1, "alice", "This is great");
        assert!(comment_matches(&c, "GREAT"));
        assert!(comment_matches(&c, "@ali"));
        assert!(comment_matches(&c, ""));
        assert!(!comment_matches(&c, "bob"));
    }

    #[test]
    fn test_newest_first_pages_of_ten() {
        let comments = sample();
        let order = CommentSort::Newest;
        let slice = paginate(&comments, |_| true, |a, b| order.compare(a, b), 1, COMMENTS_PER_PAGE);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.items.len(), 10);
        assert_eq!(slice.items[0].id, 25);

        let last = paginate(&comments, |_| true, |a, b| order.compare(a, b), 3, COMMENTS_PER_PAGE);
        assert_eq!(last.items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_post_and_author() {
        let comments = sample();
        let by_post = paginate(&comments, |_| true, |a, b| CommentSort::ByPost.compare(a, b), 1, 100);
        assert_eq!(by_post.items[0].post_id, 1);
        assert_eq!(by_post.items[0].id, 25);

        let by_author = paginate(&comments, |_| true, |a, b| CommentSort::ByAuthor.compare(a, b), 1, 100);
        assert_eq!(by_author.items[0].author(), "@alice");
        assert_eq!(by_author.items[0].id, 1);
        assert_eq!(by_author.items[13].author(), "@bob");
    }

    #[test]
    fn test_filtered_search_counts() {
        let comments = sample();
        let slice = paginate(
            &comments,
            |c| comment_matches(c, "bob"),
            |a, b| CommentSort::Oldest.compare(a, b),
            1,
            COMMENTS_PER_PAGE,
        );
        assert_eq!(slice.total_matches, 12);
        assert_eq!(slice.total_pages, 2);
        assert!(slice.items.iter().all(|c| c.id % 2 == 0));
    }

    #[test]
    fn test_blank_contact_fields_become_none() {
        assert_eq!(optional_text("  ".into()), None);
        assert_eq!(optional_text(" a@b.c ".into()), Some("a@b.c".to_string()));
    }
}
