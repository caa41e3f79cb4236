//! Admin page header with the signed-in user and a Logout button.

#[cfg(test)]
#[path = "page_header_test.rs"]
mod page_header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth;

/// Header label for the current session.
fn signed_in_label(session: &Session) -> String {
    session
        .user()
        .map_or_else(|| "Not signed in".to_owned(), |u| format!("Signed in as {}", u.display_name()))
}

#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth::sign_out(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <nav class="page-header__nav">
                <A href="/patients">"Patients"</A>
                <A href="/user-styles">"User Styles"</A>
            </nav>
            <span class="page-header__user">{move || session.with(signed_in_label)}</span>
            <button class="page-header__logout" type="button" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
