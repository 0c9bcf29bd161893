//! Status Panels
//!
//! Placeholders shown instead of a collection while it loads or after it failed to.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="loading-panel">{message}</div> }
}

/// Fetch error with a manual retry
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <span class="error-text">"Error: " {message}</span>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>"Retry"</button>
        </div>
    }
}
