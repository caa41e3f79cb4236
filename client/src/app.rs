//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{home::HomePage, login::LoginPage, patients::PatientsPage, style_admin::StyleAdminPage};
use crate::util::{auth, storage};

/// Root application component.
///
/// Provides the API config and the session restored from `localStorage`
/// (dropping an unreadable stored token), then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::debug!("api base url: {}", config.base_url);
    let session = RwSignal::new(auth::restore_session(storage::load_token()));

    provide_context(config);
    provide_context(session);

    view! {
        <Title text="Styledesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("patients") view=PatientsPage/>
                <Route path=StaticSegment("user-styles") view=StyleAdminPage/>
            </Routes>
        </Router>
    }
}
