//! Integration tests for the HTTP client against a mock backend.

use agendo_client::client::AgendoClient;
use agendo_client::ClientError;
use agendo_core::agenda::Locale;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn appointment_json(id: &str, service_id: &str, start: &str, end: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "eventId": format!("evt-{id}"),
        "startTime": start,
        "endTime": end,
        "serviceId": service_id,
        "clientName": "Maria Souza",
        "clientPhone": "11 99999-0000",
        "clientEmail": "maria@example.com"
    })
}

#[tokio::test]
async fn test_list_schedulings_parses_wire_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scheduling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            appointment_json("a1", "s1", "2024-03-01T09:00:00", "2024-03-01T10:00:00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    let appointments = client.list_schedulings().await.unwrap();

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, "a1");
    assert_eq!(appointments[0].event_id, "evt-a1");
    assert_eq!(appointments[0].service_id, "s1");
}

#[tokio::test]
async fn test_resolver_fails_soft_on_missing_and_broken_services() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/known"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "known", "name": "Corte"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();

    assert_eq!(
        client.resolve_service_name("known").await,
        Some("Corte".to_string())
    );
    assert_eq!(client.resolve_service_name("missing").await, None);
    assert_eq!(client.resolve_service_name("broken").await, None);
}

#[tokio::test]
async fn test_fetch_agenda_resolves_each_distinct_service_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scheduling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            appointment_json("a1", "shared", "2024-03-01T09:00:00", "2024-03-01T10:00:00"),
            appointment_json("a2", "shared", "2024-03-02T09:00:00", "2024-03-02T10:00:00"),
            appointment_json("a3", "missing", "2024-03-03T09:00:00", "2024-03-03T10:00:00"),
        ])))
        .mount(&server)
        .await;
    // The memoized batch must hit the shared service exactly once.
    Mock::given(method("GET"))
        .and(path("/service/shared"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"_id": "shared", "name": "Corte"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    let items = client.fetch_agenda(Locale::PtBr).await.unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].service_name.as_deref(), Some("Corte"));
    assert_eq!(items[1].service_name.as_deref(), Some("Corte"));
    // The failed lookup degrades to a blank name, the row survives.
    assert_eq!(items[2].service_name, None);
}

#[tokio::test]
async fn test_fetch_agenda_drops_malformed_timestamps_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scheduling"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            appointment_json("good", "s1", "2024-03-01T09:00:00", "2024-03-01T10:00:00"),
            appointment_json("bad", "s1", "not-a-timestamp", "2024-03-01T10:00:00"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "s1", "name": "Corte"})))
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    let items = client.fetch_agenda(Locale::PtBr).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].appointment.id, "good");
}

#[tokio::test]
async fn test_fetch_agenda_surfaces_scheduling_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scheduling"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    let err = client.fetch_agenda(Locale::PtBr).await.unwrap_err();

    match err {
        ClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_deletes_event_then_scheduling() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/event/evt-a1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/scheduling/a1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    client.cancel_scheduling("a1", "evt-a1").await.unwrap();
}

#[tokio::test]
async fn test_cancel_aborts_when_event_delete_fails() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/event/evt-a1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
        .expect(1)
        .mount(&server)
        .await;
    // The scheduling record must stay untouched.
    Mock::given(method("DELETE"))
        .and(path("/scheduling/a1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    let err = client.cancel_scheduling("a1", "evt-a1").await.unwrap_err();

    assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
}

#[tokio::test]
async fn test_get_service_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = AgendoClient::new(server.uri()).unwrap();
    let err = client.get_service("nope").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }));
}
