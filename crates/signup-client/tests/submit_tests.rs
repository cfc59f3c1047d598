//! Integration tests for [`HttpSubmitter`] against a local mock of the
//! submit endpoint.
//!
//! The mock records every request it receives (content type + JSON body)
//! and answers with a configurable status code.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

use signup_client::{ClientConfig, HttpSubmitter};
use signup_core::{
    FormState, LeadForm, Province, SubmissionStatus, Submitter, TransportError, Variant,
};

#[derive(Debug, Clone)]
struct Recorded {
    content_type: Option<String>,
    body: Value,
}

struct MockEndpoint {
    status: StatusCode,
    requests: Mutex<Vec<Recorded>>,
}

async fn record(
    State(mock): State<Arc<MockEndpoint>>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = serde_json::from_str(&body).unwrap_or(Value::Null);
    mock.requests.lock().unwrap().push(Recorded { content_type, body });
    mock.status
}

/// Start a mock `/api/submit` on an ephemeral port.
async fn spawn_endpoint(status: StatusCode) -> (SocketAddr, Arc<MockEndpoint>) {
    let mock = Arc::new(MockEndpoint {
        status,
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/api/submit", post(record))
        .with_state(Arc::clone(&mock));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, mock)
}

fn submitter_for(addr: SocketAddr) -> HttpSubmitter {
    HttpSubmitter::new(ClientConfig {
        base_url: format!("http://{addr}"),
        timeout: None,
    })
    .unwrap()
}

fn filled_training_form() -> LeadForm {
    let mut form = LeadForm::new(
        Variant::Training,
        Some("Product Owner Basis / Beginner".to_owned()),
    );
    let state = form.state_mut();
    state.set_name("Sanne Bakker");
    state.set_email("sb12345@politie.nl");
    state.toggle_province(Province::Utrecht);
    state.toggle_province(Province::NoordBrabant);
    state.set_training_date("Product Owner: 20 en 21 april in Utrecht");
    state.set_cost_center("12345");
    state.set_eenheid("Landelijke Eenheid");
    state.set_team("Team Alpha");
    state.set_privacy_accepted(true);
    form
}

// ── Success path ─────────────────────────────────────────────────────

#[tokio::test]
async fn successful_submit_posts_json_once_and_resets() {
    let (addr, mock) = spawn_endpoint(StatusCode::OK).await;
    let submitter = submitter_for(addr);
    let mut form = filled_training_form();

    let status = form.submit(&submitter).await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    let requests = mock.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1, "exactly one POST per submit");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));

    let body = &requests[0].body;
    assert_eq!(body["privacyAccepted"], Value::Bool(true));
    assert_eq!(body["course"], "Product Owner Basis / Beginner");
    assert_eq!(body["trainingDate"], "Product Owner: 20 en 21 april in Utrecht");
    assert_eq!(body["costCenter"], "12345");
    assert_eq!(body["phone"], "");
    assert_eq!(body["province"], serde_json::json!(["Utrecht", "Noord-Brabant"]));

    assert_eq!(
        *form.state(),
        FormState::initial(Variant::Training, Some("Product Owner Basis / Beginner"))
    );
}

#[tokio::test]
async fn team_submit_sends_fixed_course() {
    let (addr, mock) = spawn_endpoint(StatusCode::CREATED).await;
    let submitter = submitter_for(addr);
    let mut form = LeadForm::new(Variant::Team, None);
    let state = form.state_mut();
    state.set_name("Pieter Jansen");
    state.set_email("pj@politie.nl");
    state.toggle_province(Province::Zeeland);
    state.set_phone("06 1234 5678");
    state.set_eenheid("Eenheid Zeeland-West-Brabant");
    state.set_team("Team Kust");
    state.set_message("We willen als team beter leren plannen.");
    state.set_privacy_accepted(true);

    let status = form.submit(&submitter).await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    let requests = mock.requests.lock().unwrap().clone();
    assert_eq!(requests[0].body["course"], "Team trajecten");
    assert_eq!(requests[0].body["phone"], "06 1234 5678");
    assert_eq!(requests[0].body["trainingDate"], "");
}

// ── Failure paths ────────────────────────────────────────────────────

#[tokio::test]
async fn server_error_keeps_state_and_reports_error() {
    let (addr, mock) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let submitter = submitter_for(addr);
    let mut form = filled_training_form();
    let before = form.state().clone();

    let status = form.submit(&submitter).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(*form.state(), before);
    assert!(!form.is_submitting());
    assert_eq!(mock.requests.lock().unwrap().len(), 1, "no automatic retry");
}

#[tokio::test]
async fn client_error_is_treated_like_server_error() {
    let (addr, _mock) = spawn_endpoint(StatusCode::UNPROCESSABLE_ENTITY).await;
    let submitter = submitter_for(addr);
    let mut form = filled_training_form();
    let before = form.state().clone();

    let status = form.submit(&submitter).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(*form.state(), before);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Reserve a port, then free it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let submitter = submitter_for(addr);
    let payload = signup_core::SubmissionPayload::from(filled_training_form().state());
    let err = submitter.submit(&payload).await.unwrap_err();
    assert!(matches!(err, TransportError::Unreachable { .. }), "{err:?}");

    let mut form = filled_training_form();
    let before = form.state().clone();
    let status = form.submit(&submitter).await.unwrap();
    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(*form.state(), before);
}

#[tokio::test]
async fn blocked_submit_makes_no_request() {
    let (addr, mock) = spawn_endpoint(StatusCode::OK).await;
    let submitter = submitter_for(addr);
    let mut form = filled_training_form();
    form.state_mut().set_privacy_accepted(false);

    let err = form.submit(&submitter).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Je moet akkoord gaan met de privacyverklaring."
    );
    assert!(mock.requests.lock().unwrap().is_empty());
}
