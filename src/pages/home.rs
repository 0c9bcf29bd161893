//! Home Page
//!
//! Module cards linking to each resource page, and the tail of the log.

use leptos::ev;
use leptos::prelude::*;

use super::Page;
use crate::context::use_app_context;

/// Log lines shown at the bottom of the page
const RECENT_LOG_LINES: usize = 8;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    let modules = Page::ALL
        .iter()
        .copied()
        .filter(|page| *page != Page::Home)
        .map(|page| {
            view! {
                <button class="module-card" on:click=move |_| ctx.navigate(page)>
                    <div class="module-icon">{page.icon()}</div>
                    <div>
                        <h2>{page.title()}</h2>
                        <p>{page.description()}</p>
                    </div>
                </button>
            }
        })
        .collect_view();

    // Snapshot taken when the page is shown; Clear empties it
    let (recent, set_recent) = signal(recent_lines());
    let clear_log = move |_: ev::MouseEvent| {
        console_logger::clear();
        set_recent.set(Vec::new());
    };

    view! {
        <div class="home-page">
            <div class="hero">
                <h1>"CRUD Operations Demo"</h1>
                <p>"A demonstration of CRUD operations using the DummyJSON API"</p>
            </div>
            <div class="module-grid">{modules}</div>
            <section class="recent-log">
                <div class="recent-log-header">
                    <h2>"Recent activity"</h2>
                    <button class="link-btn" on:click=clear_log>"Clear"</button>
                </div>
                {move || {
                    let lines = recent.get();
                    if lines.is_empty() {
                        view! { <p class="empty-state">"Nothing logged yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul>
                                {lines.into_iter().map(|line| view! { <li><code>{line}</code></li> }).collect_view()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Newest first
fn recent_lines() -> Vec<String> {
    console_logger::recent()
        .into_iter()
        .rev()
        .take(RECENT_LOG_LINES)
        .map(|entry| entry.format_line())
        .collect()
}
