//! CRUD Demo App
//!
//! Shell layout: title, tab bar, notice tray, and the current page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NavBar, NoticeTray};
use crate::context::AppContext;
use crate::pages::{CommentsPage, HomePage, Page, PostsPage, QuotesPage, RecipesPage, TodosPage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new(signal(Page::default())));

    let ctx = crate::context::use_app_context();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-title" on:click=move |_| ctx.navigate(Page::Home)>
                    "CRUD Demo"
                </span>
                <NavBar />
            </header>
            <NoticeTray />
            <main class="app-main">
                // Each page mounts its own controller, so switching refetches
                {move || match ctx.current_page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Posts => view! { <PostsPage /> }.into_any(),
                    Page::Recipes => view! { <RecipesPage /> }.into_any(),
                    Page::Quotes => view! { <QuotesPage /> }.into_any(),
                    Page::Todos => view! { <TodosPage /> }.into_any(),
                    Page::Comments => view! { <CommentsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
