//! REST helpers for the auth endpoint and the `UserComponent` styling service.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, with the session's bearer
//! token attached. Native builds: every call fails with
//! [`ApiError::Unavailable`] so pages and tests compile without a transport.
//!
//! ERROR HANDLING
//! ==============
//! Admin calls return `Result<_, ApiError>` and leave the user-facing wording
//! to the page. The per-view style fetch is cosmetic: [`fetch_styles`] logs
//! and returns an empty list instead of failing.
//!
//! Every read takes an [`AbortToken`] so the owning view can cancel it when
//! it unmounts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Component, LoginRequest, LoginResponse, Role, Style, StyleAssignment, SubjectStyleAssignment};
use crate::config::ApiConfig;
use crate::state::session::Session;
use crate::util::abort::AbortToken;

const LOGIN_PATH: &str = "auth/login";
const STYLES_PATH: &str = "UserComponent";
const COMPONENTS_PATH: &str = "UserComponent/components";
const ROLES_PATH: &str = "UserComponent/roles";
const STYLE_CATALOG_PATH: &str = "UserComponent/styles";
const CONFIGS_PATH: &str = "UserComponent/configs";

fn update_path(subject_style_id: &str, style_id: &str) -> String {
    format!("UserComponent/{subject_style_id}/{style_id}")
}

fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    let value = value.trim();
    if value.is_empty() { Err(ApiError::MissingParameter(name)) } else { Ok(value) }
}

/// Base URL plus the bearer token of the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    #[must_use]
    pub fn for_session(config: &ApiConfig, session: &Session) -> Self {
        Self::new(config.clone(), session.token().map(str::to_owned))
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// `Authorization` header value, when signed in.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

async fn get_json<T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    query: &[(&str, &str)],
    abort: &AbortToken,
) -> Result<T, ApiError> {
    if abort.is_aborted() {
        return Err(ApiError::Aborted);
    }
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::get(&client.url(path)).query(query.iter().copied());
        if let Some(auth) = client.authorization() {
            request = request.header("Authorization", &auth);
        }
        if let Some(signal) = abort.signal() {
            request = request.abort_signal(Some(signal));
        }
        let resp = request.send().await.map_err(|e| {
            if abort.is_aborted() { ApiError::Aborted } else { ApiError::Transport(e.to_string()) }
        })?;
        ApiError::check_status(resp.status())?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, path, query, abort);
        Err(ApiError::Unavailable)
    }
}

async fn put_empty(client: &ApiClient, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::put(&client.url(path));
        if let Some(auth) = client.authorization() {
            request = request.header("Authorization", &auth);
        }
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        ApiError::check_status(resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, path);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] for blank credentials, otherwise
/// the transport, status or decode failure.
pub async fn login(config: &ApiConfig, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        email: require("email", email)?.to_owned(),
        password: require("password", password)?.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.url(LOGIN_PATH))
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ApiError::check_status(resp.status())?;
        resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, body, LOGIN_PATH);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the style assignments for `view_name` and the signed-in user.
///
/// Never fails: any error is logged and yields an empty list, which leaves
/// the view unstyled.
pub async fn fetch_styles(client: &ApiClient, view_name: &str, abort: &AbortToken) -> Vec<StyleAssignment> {
    match get_json::<Vec<StyleAssignment>>(client, STYLES_PATH, &[("componentName", view_name)], abort).await {
        Ok(list) => {
            log::debug!("skin: fetched {} assignment(s) for {view_name}", list.len());
            list
        }
        Err(ApiError::Aborted) => {
            log::debug!("skin: style fetch for {view_name} aborted");
            Vec::new()
        }
        Err(e) => {
            log::warn!("skin: style fetch for {view_name} failed: {e}");
            Vec::new()
        }
    }
}

/// All components that can carry style mappings.
///
/// # Errors
///
/// Propagates any transport, status or decode failure.
pub async fn fetch_components(client: &ApiClient, abort: &AbortToken) -> Result<Vec<Component>, ApiError> {
    get_json(client, COMPONENTS_PATH, &[], abort).await
}

/// All roles.
///
/// # Errors
///
/// Propagates any transport, status or decode failure.
pub async fn fetch_roles(client: &ApiClient, abort: &AbortToken) -> Result<Vec<Role>, ApiError> {
    get_json(client, ROLES_PATH, &[], abort).await
}

/// The style catalog offered in each row's picker.
///
/// # Errors
///
/// Propagates any transport, status or decode failure.
pub async fn fetch_style_catalog(client: &ApiClient, abort: &AbortToken) -> Result<Vec<Style>, ApiError> {
    get_json(client, STYLE_CATALOG_PATH, &[], abort).await
}

/// Per-subject style assignments for one component and role.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] when either id is blank, otherwise
/// any transport, status or decode failure.
pub async fn fetch_subject_assignments(
    client: &ApiClient,
    component_id: &str,
    role_id: &str,
    abort: &AbortToken,
) -> Result<Vec<SubjectStyleAssignment>, ApiError> {
    let component_id = require("componentId", component_id)?;
    let role_id = require("roleId", role_id)?;
    get_json(
        client,
        CONFIGS_PATH,
        &[("componentId", component_id), ("roleId", role_id)],
        abort,
    )
    .await
}

/// Repoint one subject's style pointer at `style_id`.
///
/// # Errors
///
/// Returns [`ApiError::MissingParameter`] when either id is blank, otherwise
/// any transport or status failure.
pub async fn update_assignment(client: &ApiClient, subject_style_id: &str, style_id: &str) -> Result<(), ApiError> {
    let subject_style_id = require("subjectStyleId", subject_style_id)?;
    let style_id = require("styleId", style_id)?;
    let path = update_path(subject_style_id, style_id);
    log::info!("updating style pointer {subject_style_id} -> {style_id}");
    put_empty(client, &path).await
}
