use super::*;
use futures::executor::block_on;

use crate::util::abort::AbortHandle;

fn client(token: Option<&str>) -> ApiClient {
    ApiClient::new(ApiConfig::from_base_url(Some("https://api.test/api")), token.map(str::to_owned))
}

// =============================================================
// Paths and headers
// =============================================================

#[test]
fn update_path_embeds_both_ids() {
    assert_eq!(update_path("12", "3"), "UserComponent/12/3");
}

#[test]
fn client_url_uses_config_base() {
    assert_eq!(client(None).url(CONFIGS_PATH), "https://api.test/api/UserComponent/configs");
    assert_eq!(client(None).url(LOGIN_PATH), "https://api.test/api/auth/login");
}

#[test]
fn authorization_is_bearer_token() {
    assert_eq!(client(Some("abc")).authorization().as_deref(), Some("Bearer abc"));
    assert_eq!(client(None).authorization(), None);
}

#[test]
fn client_for_signed_out_session_has_no_token() {
    let c = ApiClient::for_session(&ApiConfig::from_base_url(None), &Session::default());
    assert_eq!(c.authorization(), None);
}

#[test]
fn require_trims_and_rejects_blank() {
    assert_eq!(require("roleId", "  r1 "), Ok("r1"));
    assert_eq!(require("roleId", "   "), Err(ApiError::MissingParameter("roleId")));
}

// =============================================================
// Calls without a transport
// =============================================================

#[test]
fn fetch_styles_degrades_to_empty_list() {
    let list = block_on(fetch_styles(&client(Some("t")), "PageOne", &AbortToken::none()));
    assert!(list.is_empty());
}

#[test]
fn subject_assignments_validate_ids_before_sending() {
    let c = client(Some("t"));
    assert_eq!(
        block_on(fetch_subject_assignments(&c, "", "r1", &AbortToken::none())),
        Err(ApiError::MissingParameter("componentId"))
    );
    assert_eq!(
        block_on(fetch_subject_assignments(&c, "1", " ", &AbortToken::none())),
        Err(ApiError::MissingParameter("roleId"))
    );
    assert_eq!(
        block_on(fetch_subject_assignments(&c, "1", "r1", &AbortToken::none())),
        Err(ApiError::Unavailable)
    );
}

#[test]
fn update_assignment_validates_ids() {
    let c = client(Some("t"));
    assert_eq!(
        block_on(update_assignment(&c, "", "4")),
        Err(ApiError::MissingParameter("subjectStyleId"))
    );
    assert_eq!(block_on(update_assignment(&c, "9", "")), Err(ApiError::MissingParameter("styleId")));
    assert_eq!(block_on(update_assignment(&c, "9", "4")), Err(ApiError::Unavailable));
}

#[test]
fn login_rejects_blank_credentials() {
    let config = ApiConfig::from_base_url(None);
    assert_eq!(block_on(login(&config, " ", "pw")), Err(ApiError::MissingParameter("email")));
    assert_eq!(block_on(login(&config, "a@b.c", "")), Err(ApiError::MissingParameter("password")));
    assert_eq!(block_on(login(&config, "a@b.c", "pw")), Err(ApiError::Unavailable));
}

#[test]
fn catalog_calls_surface_transport_errors() {
    let c = client(None);
    let live = AbortHandle::new();
    assert_eq!(block_on(fetch_components(&c, &live.token())), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_roles(&c, &live.token())), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_style_catalog(&c, &live.token())), Err(ApiError::Unavailable));
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn aborted_token_stops_reads_before_sending() {
    let c = client(Some("t"));
    let mut handle = AbortHandle::new();
    let token = handle.token();
    handle.abort();
    assert_eq!(block_on(fetch_components(&c, &token)), Err(ApiError::Aborted));
    assert_eq!(block_on(fetch_roles(&c, &token)), Err(ApiError::Aborted));
    assert_eq!(block_on(fetch_style_catalog(&c, &token)), Err(ApiError::Aborted));
    assert_eq!(block_on(fetch_subject_assignments(&c, "1", "r1", &token)), Err(ApiError::Aborted));
}

#[test]
fn dropped_view_handle_cancels_catalog_join() {
    let c = client(Some("t"));
    let handle = AbortHandle::new();
    let token = handle.token();
    drop(handle);
    let joined = block_on(futures::future::try_join3(
        fetch_components(&c, &token),
        fetch_roles(&c, &token),
        fetch_style_catalog(&c, &token),
    ));
    assert_eq!(joined, Err(ApiError::Aborted));
}

#[test]
fn aborted_style_fetch_is_empty() {
    let mut handle = AbortHandle::new();
    let token = handle.token();
    handle.abort();
    assert!(block_on(fetch_styles(&client(Some("t")), "UserManagement", &token)).is_empty());
}

#[test]
fn missing_parameter_wins_over_abort() {
    let mut handle = AbortHandle::new();
    let token = handle.token();
    handle.abort();
    assert_eq!(
        block_on(fetch_subject_assignments(&client(None), "", "r1", &token)),
        Err(ApiError::MissingParameter("componentId"))
    );
}
