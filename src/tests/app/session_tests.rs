use serde_json::json;

use crate::{
    app::{READY_STATUS, SettingsSession, StatusLine},
    form::FormPhase,
    gateway::GatewayError,
};

use super::super::support::{FakeGateway, endpoint, payload};

fn session_with_api_key() -> SettingsSession<FakeGateway, StatusLine> {
    let gateway =
        FakeGateway::with_fetch(Ok(payload(json!([{"name": "api_key", "value": "abc"}]))));
    SettingsSession::with_hooks(gateway, endpoint(), StatusLine::new())
}

#[test]
fn construction_loads_and_reports_ready() {
    let session = session_with_api_key();
    assert_eq!(session.phase(), FormPhase::Ready);
    assert_eq!(session.form_data().get("api_key"), Some(&json!("abc")));
    assert_eq!(session.hooks().message(), READY_STATUS);
    assert!(!session.has_changes());
}

#[test]
fn load_failure_goes_to_the_error_hook() {
    let gateway = FakeGateway::with_fetch(Err(GatewayError::transport("connection reset")));
    let session = SettingsSession::with_hooks(gateway, endpoint(), StatusLine::new());
    assert_eq!(session.phase(), FormPhase::Ready);
    assert!(session.fields().is_empty());
    assert_eq!(
        session.hooks().message(),
        "Unable to load settings: connection reset"
    );
}

#[test]
fn reload_recovers_after_a_failed_load() {
    let mut gateway = FakeGateway::with_fetch(Err(GatewayError::http(500, None)));
    gateway
        .fetches
        .push_back(Ok(payload(json!([{"name": "api_key", "value": "abc"}]))));
    let mut session = SettingsSession::with_hooks(gateway, endpoint(), StatusLine::new());
    session.reload();
    assert_eq!(session.phase(), FormPhase::Ready);
    assert_eq!(session.form_data().get("api_key"), Some(&json!("abc")));
    assert_eq!(session.hooks().message(), READY_STATUS);
    assert_eq!(session_gateway(&mut session).fetch_calls, 2);
}

#[test]
fn submit_puts_working_values_and_rebaselines() {
    let mut session = session_with_api_key();
    session.change_field("api_key", json!("xyz"));

    assert!(session.errors().is_empty(), "no errors before submit");

    let accepted = {
        let gateway = session_gateway(&mut session);
        gateway.script_save(Ok(payload(json!([{"name": "api_key", "value": "xyz"}]))));
        session.submit()
    };
    assert!(accepted);
    assert_eq!(session.hooks().message(), "Changes saved");
    assert!(!session.has_changes());
}

#[test]
fn submit_is_a_noop_without_changes() {
    let mut session = session_with_api_key();
    assert!(!session.submit());
    assert_eq!(
        session.hooks().message(),
        READY_STATUS,
        "a refused submit never leaves Ready"
    );
}

#[test]
fn rejected_submit_reconciles_server_errors() {
    let mut session = session_with_api_key();
    session.change_field("api_key", json!("xyz"));
    {
        let gateway = session_gateway(&mut session);
        gateway.script_save(Err(GatewayError::http(
            400,
            Some(json!({"errors": {"api_key": "invalid format"}})),
        )));
    }
    assert!(!session.submit());
    assert_eq!(session.phase(), FormPhase::Ready);
    assert_eq!(session.errors().field("api_key"), Some("invalid format"));
    assert_eq!(session.form_data().get("api_key"), Some(&json!("xyz")));
    assert_eq!(
        session.hooks().message(),
        "Unable to save. Please correct the errors below."
    );

    // Editing the field dismisses its message before any retry.
    session.change_field("api_key", json!("valid"));
    assert_eq!(session.errors().field("api_key"), None);
}

#[test]
fn submitted_body_matches_working_values() {
    let mut session = session_with_api_key();
    session.change_field("api_key", json!("xyz"));
    let expected = session.form_data().clone();
    {
        let gateway = session_gateway(&mut session);
        gateway.script_save(Ok(payload(json!([{"name": "api_key", "value": "xyz"}]))));
    }
    session.submit();
    let gateway = session_gateway(&mut session);
    assert_eq!(gateway.saved_bodies.len(), 1);
    assert_eq!(gateway.saved_bodies[0], expected);
}

fn session_gateway<'a>(
    session: &'a mut SettingsSession<FakeGateway, StatusLine>,
) -> &'a mut FakeGateway {
    session.gateway_mut_for_test()
}
