//! Loading spinner component.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class="spinner" />
            <p class="spinner-text">"Analyzing symptoms..."</p>
        </div>
    }
}
