//! Header component.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <span class="logo">"HelpRX"</span>
            <a href="tel:911" class="btn btn-emergency">
                "Emergency: 911"
            </a>
        </header>
    }
}
