//! Todos Page
//!
//! Besides the form, each card toggles its todo in place.

use leptos::prelude::*;

use crate::api::{todo_client, CompletionPatch};
use crate::components::{CheckboxField, NumberField, ResourcePage, TextField};
use crate::controller::PageController;
use crate::models::{Record, Todo};

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctrl = PageController::mount(todo_client());

    let render_item = Callback::new(move |todo: Record<Todo>| {
        let id = todo.id;
        let patch = CompletionPatch::toggled(&todo);
        let task_class = if todo.completed { "todo-task done" } else { "todo-task" };
        view! {
            <div class="todo-row">
                <input
                    type="checkbox"
                    prop:checked=move || ctrl.with_record(id, |t| t.completed).unwrap_or(false)
                    disabled=move || ctrl.is_pending(id)
                    on:change=move |_| ctrl.patch(id, patch, move |t| patch.apply(t))
                />
                <h3 class=task_class>{todo.fields.todo}</h3>
            </div>
            <p class="card-meta">{format!("User ID: {}", todo.fields.user_id)}</p>
        }
        .into_any()
    });

    let render_fields = Callback::new(|(draft, set_draft): (ReadSignal<Todo>, WriteSignal<Todo>)| {
        let start = draft.get_untracked();
        view! {
            <TextField
                label="Task"
                value=start.todo
                required=true
                on_change=move |task: String| set_draft.update(|t| t.todo = task)
            />
            <CheckboxField
                label="Completed"
                checked=start.completed
                on_change=move |done: bool| set_draft.update(|t| t.completed = done)
            />
            <NumberField
                label="User ID"
                value=start.user_id
                min=1
                on_change=move |user: u32| set_draft.update(|t| t.user_id = user)
            />
        }
        .into_any()
    });

    view! {
        <ResourcePage
            controller=ctrl
            title="Todos"
            render_item=render_item
            render_fields=render_fields
        />
    }
}
