//! Page State
//!
//! The non-reactive half of a resource page: the authoritative collection,
//! the list/form phase and the bookkeeping around outstanding requests.
//! Everything here is plain data so it can be tested off the browser.

use std::collections::BTreeSet;

use crate::models::{Draft, Record};

/// What the page is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<F> {
    /// Initial fetch in flight
    Loading,
    /// Fetch failed; message shown with a retry button
    Failed(String),
    Listing,
    /// Form open on a draft (create when `id` is `None`)
    Editing(Draft<F>),
}

/// Where a write for a record has to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// No id yet: POST to the service
    Create,
    /// Id synthesized in this session; the service would answer 404
    Local(u32),
    /// Id the service handed out
    Remote(u32),
}

/// Identifies the form a submit was started from. A response whose ticket no
/// longer matches the open form is not allowed to touch the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    form: u64,
}

#[derive(Debug, Clone)]
pub struct PageState<F> {
    pub items: Vec<Record<F>>,
    pub phase: Phase<F>,
    /// Ids synthesized here; the backend has never heard of them
    local_ids: BTreeSet<u32>,
    /// Ids with an update/delete/toggle still in flight
    pending: BTreeSet<u32>,
    /// Bumped every time a form is opened or closed
    form: u64,
    submitting: Option<SubmitTicket>,
}

impl<F: Clone> PageState<F> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Loading,
            local_ids: BTreeSet::new(),
            pending: BTreeSet::new(),
            form: 0,
            submitting: None,
        }
    }

    // ========================
    // Loading
    // ========================

    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// A successful load replaces the collection and forgets local-only records
    pub fn finish_load(&mut self, result: Result<Vec<Record<F>>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.local_ids.clear();
                self.pending.clear();
                self.phase = Phase::Listing;
            }
            Err(message) => self.phase = Phase::Failed(message),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    // ========================
    // Form
    // ========================

    pub fn open_create(&mut self, defaults: F) {
        self.form += 1;
        self.phase = Phase::Editing(Draft::new(defaults));
    }

    /// Returns `false` when no record has that id
    pub fn open_edit(&mut self, id: u32) -> bool {
        let Some(draft) = self.get(id).map(Draft::from) else {
            return false;
        };
        self.form += 1;
        self.phase = Phase::Editing(draft);
        true
    }

    /// Close the form and drop the draft; the collection is not touched.
    /// A submit still in flight keeps blocking new submits until it answers.
    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Editing(_)) {
            self.form += 1;
            self.phase = Phase::Listing;
        }
    }

    pub fn draft(&self) -> Option<&Draft<F>> {
        match &self.phase {
            Phase::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// `None` if no form is open or a submit is already in flight
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.submitting.is_some() || self.draft().is_none() {
            return None;
        }
        let ticket = SubmitTicket { form: self.form };
        self.submitting = Some(ticket);
        Some(ticket)
    }

    /// Finish a submit. Success closes the form; failure reopens it on the
    /// submitted draft. Returns `false` (and leaves the phase alone) when the
    /// form the ticket belongs to was cancelled or replaced meanwhile.
    pub fn end_submit(&mut self, ticket: SubmitTicket, outcome: Result<(), Draft<F>>) -> bool {
        if self.submitting == Some(ticket) {
            self.submitting = None;
        }
        let current = ticket.form == self.form && matches!(self.phase, Phase::Editing(_));
        if current {
            self.phase = match outcome {
                Ok(()) => Phase::Listing,
                Err(draft) => Phase::Editing(draft),
            };
        }
        current
    }

    /// Successful create: append the echo unless its form was abandoned.
    /// Returns the id the record was stored under.
    pub fn finish_create(&mut self, ticket: SubmitTicket, echo: Record<F>) -> Option<u32> {
        self.end_submit(ticket, Ok(()))
            .then(|| self.insert_created(echo))
    }

    /// Successful update: write the submitted fields unless the form was abandoned
    pub fn finish_update(&mut self, ticket: SubmitTicket, id: u32, fields: F) -> bool {
        self.end_submit(ticket, Ok(())) && self.replace_fields(id, fields)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    // ========================
    // Collection
    // ========================

    pub fn get(&self, id: u32) -> Option<&Record<F>> {
        self.items.iter().find(|record| record.id == id)
    }

    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|record| record.id).max().unwrap_or(0) + 1
    }

    /// Append a created record under `max(existing) + 1`. The mock services
    /// echo a fixed id and store nothing, so the record is marked local.
    pub fn insert_created(&mut self, echo: Record<F>) -> u32 {
        let id = self.next_id();
        self.local_ids.insert(id);
        self.items.push(Record::new(id, echo.fields));
        id
    }

    /// Swap in new fields for `id`, keeping its position. Returns `false` if absent.
    pub fn replace_fields(&mut self, id: u32, fields: F) -> bool {
        self.modify(id, |current| *current = fields)
    }

    pub fn modify(&mut self, id: u32, f: impl FnOnce(&mut F)) -> bool {
        match self.items.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                f(&mut record.fields);
                true
            }
            None => false,
        }
    }

    /// Remove `id` if present; order of the rest is preserved
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|record| record.id != id);
        self.local_ids.remove(&id);
        self.items.len() != before
    }

    pub fn is_local(&self, id: u32) -> bool {
        self.local_ids.contains(&id)
    }

    pub fn target(&self, id: Option<u32>) -> Target {
        match id {
            None => Target::Create,
            Some(id) if self.is_local(id) => Target::Local(id),
            Some(id) => Target::Remote(id),
        }
    }

    // ========================
    // Outstanding mutations
    // ========================

    /// Returns `false` if `id` already has a mutation in flight
    pub fn begin_mutation(&mut self, id: u32) -> bool {
        self.pending.insert(id)
    }

    pub fn end_mutation(&mut self, id: u32) {
        self.pending.remove(&id);
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.pending.contains(&id)
    }

    /// Delete confirmed (or local): drop the record and release its guard
    pub fn finish_delete(&mut self, id: u32) -> bool {
        self.end_mutation(id);
        self.remove(id)
    }

    /// Partial update confirmed (or local): mirror it and release the guard
    pub fn finish_patch(&mut self, id: u32, apply: impl FnOnce(&mut F)) -> bool {
        self.end_mutation(id);
        self.modify(id, apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CompletionPatch;
    use crate::models::{Post, Todo};

    fn post(id: u32, title: &str) -> Record<Post> {
        Record::new(
            id,
            Post {
                title: title.to_string(),
                body: format!("body {}", id),
                ..Post::default()
            },
        )
    }

    fn loaded(items: Vec<Record<Post>>) -> PageState<Post> {
        let mut state = PageState::new();
        state.finish_load(Ok(items));
        state
    }

    fn titled(title: &str) -> Post {
        Post {
            title: title.to_string(),
            ..Post::default()
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let mut state = PageState::<Post>::new();
        assert!(state.is_loading());

        state.finish_load(Err("offline".into()));
        assert_eq!(state.error(), Some("offline"));

        state.begin_load();
        state.finish_load(Ok(vec![post(1, "a")]));
        assert_eq!(state.phase, Phase::Listing);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_create_synthesizes_next_id() {
        let mut state = loaded(vec![post(2, "a"), post(7, "b"), post(4, "c")]);
        let fields = Post {
            title: "x".into(),
            body: "y".into(),
            tags: vec![],
            ..Post::default()
        };

        let id = state.insert_created(Record::new(252, fields.clone()));

        assert_eq!(id, 8);
        assert_eq!(state.items.len(), 4);
        assert_eq!(state.items.iter().filter(|r| r.fields == fields).count(), 1);
        assert_eq!(state.items.last().map(|r| r.id), Some(8));
        assert!(state.is_local(8));
    }

    #[test]
    fn test_create_ignores_echoed_id() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        assert_eq!(state.insert_created(post(2, "dup")), 3);
        assert_eq!(state.insert_created(post(2, "dup again")), 4);
        let ids: Vec<u32> = state.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_create_into_empty_collection() {
        let mut state = loaded(vec![]);
        assert_eq!(state.insert_created(post(99, "first")), 1);
    }

    #[test]
    fn test_remove_preserves_others() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b"), post(3, "c")]);
        let before = state.items.clone();

        assert!(state.remove(2));

        assert_eq!(state.items, vec![before[0].clone(), before[2].clone()]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut state = loaded(vec![post(1, "a")]);
        let before = state.items.clone();
        assert!(!state.remove(42));
        assert_eq!(state.items, before);
    }

    #[test]
    fn test_replace_fields_touches_only_target() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b"), post(3, "c")]);
        let before = state.items.clone();
        let mut fields = before[1].fields.clone();
        fields.title = "changed".into();

        assert!(state.replace_fields(2, fields));

        assert_eq!(state.items[0], before[0]);
        assert_eq!(state.items[2], before[2]);
        assert_eq!(state.items[1].id, 2);
        assert_eq!(state.items[1].title, "changed");
        assert_eq!(state.items[1].body, before[1].body);
        assert_eq!(state.items[1].tags, before[1].tags);
    }

    #[test]
    fn test_cancel_leaves_collection_identical() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        let before = state.items.clone();

        assert!(state.open_edit(2));
        assert_eq!(state.draft().and_then(|d| d.id), Some(2));
        state.cancel();

        assert_eq!(state.phase, Phase::Listing);
        assert_eq!(state.items, before);
    }

    #[test]
    fn test_open_edit_missing_id() {
        let mut state = loaded(vec![post(1, "a")]);
        assert!(!state.open_edit(9));
        assert_eq!(state.phase, Phase::Listing);
    }

    #[test]
    fn test_open_create_has_no_id() {
        let mut state = loaded(vec![]);
        state.open_create(Post::default());
        assert_eq!(state.draft().map(|d| d.id), Some(None));
    }

    #[test]
    fn test_submit_needs_open_form() {
        let mut state = loaded(vec![post(1, "a")]);
        assert_eq!(state.begin_submit(), None);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_failed_submit_reopens_draft() {
        let mut state = loaded(vec![post(1, "a")]);
        state.open_create(Post::default());
        let ticket = state.begin_submit().expect("form is open");
        assert_eq!(state.begin_submit(), None);

        let submitted = Draft::new(titled("typed"));
        assert!(state.end_submit(ticket, Err(submitted.clone())));

        assert_eq!(state.draft(), Some(&submitted));
        assert!(!state.is_submitting());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_failed_update_keeps_record() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        let before = state.items.clone();
        assert!(state.open_edit(2));
        let ticket = state.begin_submit().expect("form is open");

        let edited = Draft { id: Some(2), fields: titled("edited") };
        state.end_submit(ticket, Err(edited.clone()));

        assert_eq!(state.items, before);
        assert_eq!(state.draft(), Some(&edited));
    }

    #[test]
    fn test_finish_create_appends_and_closes() {
        let mut state = loaded(vec![post(5, "a")]);
        state.open_create(Post::default());
        let ticket = state.begin_submit().expect("form is open");

        assert_eq!(state.finish_create(ticket, post(1, "new")), Some(6));

        assert_eq!(state.phase, Phase::Listing);
        assert_eq!(state.items.last().map(|r| r.title.as_str()), Some("new"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_finish_update_writes_submitted_fields() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        assert!(state.open_edit(2));
        let ticket = state.begin_submit().expect("form is open");

        assert!(state.finish_update(ticket, 2, titled("b2")));

        assert_eq!(state.phase, Phase::Listing);
        assert_eq!(state.items[1].title, "b2");
        assert_eq!(state.items[0], post(1, "a"));
    }

    #[test]
    fn test_late_failure_after_cancel_keeps_new_form() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        state.open_create(Post::default());
        let ticket = state.begin_submit().expect("form is open");
        state.cancel();

        assert!(state.open_edit(2));
        // the abandoned create still holds the submit slot
        assert_eq!(state.begin_submit(), None);

        let late = Draft::new(titled("new"));
        assert!(!state.end_submit(ticket, Err(late)));

        assert_eq!(state.draft().and_then(|d| d.id), Some(2));
        assert!(!state.is_submitting());
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_late_success_after_cancel_is_dropped() {
        let mut state = loaded(vec![post(1, "a")]);
        let before = state.items.clone();
        state.open_create(Post::default());
        let ticket = state.begin_submit().expect("form is open");
        state.cancel();
        state.open_create(Post::default());

        assert_eq!(state.finish_create(ticket, post(1, "cancelled")), None);

        assert_eq!(state.items, before);
        assert_eq!(state.draft().map(|d| d.id), Some(None));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_late_update_after_reload_is_dropped() {
        let mut state = loaded(vec![post(1, "a")]);
        assert!(state.open_edit(1));
        let ticket = state.begin_submit().expect("form is open");
        state.begin_load();
        state.finish_load(Ok(vec![post(1, "a")]));

        assert!(!state.finish_update(ticket, 1, titled("stale")));
        assert_eq!(state.items, vec![post(1, "a")]);
        assert_eq!(state.phase, Phase::Listing);
    }

    #[test]
    fn test_write_targets() {
        let mut state = loaded(vec![post(1, "a")]);
        let local = state.insert_created(post(1, "b"));

        assert_eq!(state.target(None), Target::Create);
        assert_eq!(state.target(Some(1)), Target::Remote(1));
        assert_eq!(state.target(Some(local)), Target::Local(local));

        assert!(state.finish_delete(local));
        assert_eq!(state.target(Some(local)), Target::Remote(local));
    }

    #[test]
    fn test_failed_delete_leaves_collection() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        let before = state.items.clone();

        assert!(state.begin_mutation(2));
        assert!(!state.begin_mutation(2));
        state.end_mutation(2);

        assert_eq!(state.items, before);
        assert!(!state.is_pending(2));
    }

    #[test]
    fn test_finish_delete_releases_guard() {
        let mut state = loaded(vec![post(1, "a"), post(2, "b")]);
        assert!(state.begin_mutation(1));

        assert!(state.finish_delete(1));
        assert!(!state.is_pending(1));
        assert_eq!(state.items, vec![post(2, "b")]);

        assert!(state.begin_mutation(1));
        assert!(!state.finish_delete(1));
    }

    #[test]
    fn test_pending_mutation_guard() {
        let mut state = loaded(vec![post(1, "a")]);
        assert!(state.begin_mutation(1));
        assert!(!state.begin_mutation(1));
        assert!(state.is_pending(1));
        state.end_mutation(1);
        assert!(state.begin_mutation(1));
    }

    #[test]
    fn test_reload_forgets_local_records() {
        let mut state = loaded(vec![post(1, "a")]);
        let id = state.insert_created(post(1, "local"));
        assert!(state.is_local(id));

        state.finish_load(Ok(vec![post(1, "a")]));
        assert!(!state.is_local(id));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_toggle_todo_twice() {
        let original = Record::new(1, Todo { todo: "a".into(), completed: false, user_id: 1 });
        let mut state = PageState::new();
        state.finish_load(Ok(vec![original.clone()]));

        assert!(state.begin_mutation(1));
        let patch = CompletionPatch::toggled(&state.items[0]);
        assert!(state.finish_patch(1, |t| patch.apply(t)));
        assert!(state.items[0].completed);
        assert_eq!(state.items[0].todo, "a");
        assert!(!state.is_pending(1));

        let patch = CompletionPatch::toggled(&state.items[0]);
        state.finish_patch(1, |t| patch.apply(t));
        assert_eq!(state.items, vec![original]);
    }
}
