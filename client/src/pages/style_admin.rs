//! User/role style management page (view identity `UserManagement`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the component, role and style catalogs together on mount, lists the
//! per-subject assignments for a chosen component and role, and repoints a
//! subject's style through the service. The toolbar carries marker `s4`; the
//! rows carry `s5` and mount after the first style pass.
//!
//! ERROR HANDLING
//! ==============
//! Every failure here is load-bearing: loading stops and a fixed message is
//! shown in the banner. Local rows change only after the service accepted an
//! update. Reads still in flight are aborted when the view unmounts; an
//! aborted read changes nothing.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::assignment_table::AssignmentTable;
use crate::components::error_banner::ErrorBanner;
use crate::components::page_header::PageHeader;
use crate::components::protected::RequireAuth;
#[cfg(feature = "csr")]
use crate::net::error::ApiError;
use crate::state::style_admin::StyleAdminState;
#[cfg(feature = "csr")]
use crate::state::style_admin::{CONFIGS_LOAD_FAILED, INITIAL_LOAD_FAILED, UPDATE_FAILED};
use crate::util::abort::AbortHandle;
use crate::util::auth::ApiHandle;
use crate::util::view_skin::use_view_skin;

pub const VIEW_NAME: &str = "UserManagement";
pub const TOOLBAR_MARKER: &str = "s4";

#[component]
pub fn StyleAdminPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <StyleAdminView/>
        </RequireAuth>
    }
}

#[component]
fn StyleAdminView() -> impl IntoView {
    let root = NodeRef::<Div>::new();
    let phase = use_view_skin(VIEW_NAME, root);
    let api = ApiHandle::from_context();
    let state = RwSignal::new(StyleAdminState::default());

    // One slot for the mount-time catalog load, one re-armed per configs query.
    let catalog_abort = StoredValue::new_local(AbortHandle::new());
    let configs_abort = StoredValue::new_local(AbortHandle::default());
    on_cleanup(move || {
        catalog_abort.try_update_value(AbortHandle::abort);
        configs_abort.try_update_value(AbortHandle::abort);
    });

    state.update(StyleAdminState::begin_load);
    #[cfg(feature = "csr")]
    {
        let client = api.client();
        let token = catalog_abort.with_value(AbortHandle::token);
        leptos::task::spawn_local(async move {
            let result = futures::future::try_join3(
                crate::net::api::fetch_components(&client, &token),
                crate::net::api::fetch_roles(&client, &token),
                crate::net::api::fetch_style_catalog(&client, &token),
            )
            .await;
            state.try_update(|s| match result {
                Ok(catalogs) => s.finish_catalogs(catalogs),
                Err(ApiError::Aborted) => log::debug!("catalog load aborted"),
                Err(e) => {
                    log::error!("catalog load failed: {e}");
                    s.fail(INITIAL_LOAD_FAILED);
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (component_id, role_id) = match state.with_untracked(StyleAdminState::selection) {
            Ok(ids) => ids,
            Err(msg) => {
                state.update(|s| s.error = Some(msg.to_owned()));
                return;
            }
        };
        // Supersedes any configs query still in flight.
        let Some(token) = configs_abort.try_update_value(AbortHandle::renew) else {
            return;
        };
        state.update(StyleAdminState::begin_load);
        #[cfg(feature = "csr")]
        {
            let client = api.client();
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::api::fetch_subject_assignments(&client, &component_id, &role_id, &token).await;
                state.try_update(|s| match result {
                    Ok(list) => s.finish_assignments(list),
                    Err(ApiError::Aborted) => log::debug!("config load for component {component_id} aborted"),
                    Err(e) => {
                        log::error!("config load for component {component_id} role {role_id} failed: {e}");
                        s.fail(CONFIGS_LOAD_FAILED);
                    }
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (component_id, role_id, token);
        }
    };

    let on_style_change = Callback::new(move |(subject_id, style_id): (String, String)| {
        let request = match state.with_untracked(|s| s.update_request(&subject_id, &style_id)) {
            Ok(request) => request,
            Err(msg) => {
                state.update(|s| s.error = Some(msg.to_owned()));
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            let client = api.client();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_assignment(&client, &request.pointer_id, &request.style_id).await {
                    Ok(()) => {
                        state.try_update(|s| s.confirm_update(&request));
                    }
                    Err(e) => {
                        log::error!("update of subject {} failed: {e}", request.subject_id);
                        state.try_update(|s| s.error = Some(UPDATE_FAILED.to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, api);
        }
    });

    let component_options = move || {
        state
            .get()
            .components
            .into_iter()
            .map(|c| view! { <option value=c.id>{c.name}</option> })
            .collect_view()
    };
    let role_options = move || {
        state
            .get()
            .roles
            .into_iter()
            .map(|r| view! { <option value=r.id>{r.name}</option> })
            .collect_view()
    };

    view! {
        <div class="page style-admin-page" node_ref=root data-skin-phase=move || phase.get().as_str()>
            <PageHeader title="User Style Management"/>
            <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone()))/>
            <form class="style-toolbar" data-style-id=TOOLBAR_MARKER on:submit=on_submit>
                <label class="field">
                    "Component"
                    <select
                        class="field__input"
                        prop:value=move || state.with(|s| s.selected_component.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.selected_component = value);
                        }
                    >
                        <option value="">"Select Component"</option>
                        {component_options}
                    </select>
                </label>
                <label class="field">
                    "Role"
                    <select
                        class="field__input"
                        prop:value=move || state.with(|s| s.selected_role.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.selected_role = value);
                        }
                    >
                        <option value="">"Select Role"</option>
                        {role_options}
                    </select>
                </label>
                <button class="style-toolbar__submit" type="submit" disabled=move || state.with(|s| s.loading)>
                    "Load"
                </button>
            </form>
            <Show when=move || state.with(|s| s.loading)>
                <p class="loading">"Loading..."</p>
            </Show>
            <AssignmentTable
                assignments=Signal::derive(move || state.with(|s| s.assignments.clone()))
                styles=Signal::derive(move || state.with(|s| s.styles.clone()))
                on_change=on_style_change
            />
        </div>
    }
}
