//! Navigation Bar Component
//!
//! Tab bar for switching between pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::pages::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            {Page::ALL.iter().map(|page| {
                let page = *page;
                let tab_class = move || {
                    if ctx.current_page.get() == page { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.navigate(page)>
                        <span class="nav-icon">{page.icon()}</span>
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
