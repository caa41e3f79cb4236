//! Landing page with links to login and both admin pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Styledesk"</h1>
            <ul class="home-links">
                <li><A href="/login">"Login"</A></li>
                <li><A href="/patients">"Patient Management"</A></li>
                <li><A href="/user-styles">"User Style Management"</A></li>
            </ul>
        </div>
    }
}
