//! Route guard for the admin pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;
use crate::util::jwt::now_secs;

/// Render `children` only for an authenticated session; otherwise redirect
/// to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated(now_secs()))
            fallback=|| view! { <p class="guard-message">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}
