mod support;

use clinic_client::{
    AppointmentFilters, AppointmentsClient, Method, PatientsClient, TokenStore, UsersClient,
    ACCESS_TOKEN_COOKIE,
};
use client_test_support::envelopes;
use serde_json::json;
use support::test_stack;

#[ctor::ctor]
fn init_logging() {
    client_test_support::logging::init();
}

fn query_of(request: &clinic_client::ApiRequest) -> Vec<(String, String)> {
    request.query.clone()
}

#[tokio::test]
async fn patients_list_builds_the_documented_query() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();
    stack.wire.enqueue_ok(
        200,
        envelopes::list_page(
            json!([{ "id": "p-1", "documento": "123", "nombres": "Ana", "apellidos": "García" }]),
            2,
            10,
            31,
            4,
        ),
    );

    let client = PatientsClient::new(stack.authorized.clone(), stack.config.clone());
    let page = client.list(2, 10, "garcia").await.unwrap();

    let sent = stack.wire.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "/api/patients");
    assert_eq!(
        query_of(&sent[0]),
        vec![
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string()),
            ("search".to_string(), "garcia".to_string()),
        ]
    );
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer abc"));

    // View state comes strictly from data/pagination.
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].nombres.as_deref(), Some("Ana"));
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.total, 31);
}

#[tokio::test]
async fn patients_list_omits_blank_search_and_defaults_pagination() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();
    stack
        .wire
        .enqueue_ok(200, envelopes::list_without_pagination(json!([])));

    let client = PatientsClient::new(stack.authorized.clone(), stack.config.clone());
    let page = client.list(1, 10, "   ").await.unwrap();

    let sent = stack.wire.sent();
    assert_eq!(
        query_of(&sent[0]),
        vec![
            ("page".to_string(), "1".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]
    );
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 10);
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn user_activation_round_trips_the_activo_flag() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();

    let client = UsersClient::new(stack.authorized.clone(), stack.config.clone());
    client.deactivate("u-7").await.unwrap();
    client.activate("u-7").await.unwrap();
    client.change_password("u-7", "nueva-clave").await.unwrap();

    let sent = stack.wire.sent();
    assert_eq!(sent.len(), 3);
    for request in &sent {
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/api/users/u-7");
    }
    assert_eq!(sent[0].body, Some(json!({ "activo": false })));
    assert_eq!(sent[1].body, Some(json!({ "activo": true })));
    assert_eq!(sent[2].body, Some(json!({ "contrasena": "nueva-clave" })));
}

#[tokio::test]
async fn appointment_filters_reach_the_query_string() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();
    stack
        .wire
        .enqueue_ok(200, envelopes::list_without_pagination(json!([])));

    let client = AppointmentsClient::new(stack.authorized.clone(), stack.config.clone());
    let filters = AppointmentFilters {
        fecha_inicio: Some("2026-09-01".to_string()),
        fecha_fin: Some("2026-09-30".to_string()),
        estado_id: Some(2),
        profesional_id: Some("prof-1".to_string()),
        tipo_servicio_id: None,
        search: Some("garcia".to_string()),
    };
    client.list(1, 10, &filters).await.unwrap();

    let query = query_of(&stack.wire.sent()[0]);
    assert!(query.contains(&("fecha_inicio".to_string(), "2026-09-01".to_string())));
    assert!(query.contains(&("fecha_fin".to_string(), "2026-09-30".to_string())));
    assert!(query.contains(&("estado_id".to_string(), "2".to_string())));
    assert!(query.contains(&("profesional_id".to_string(), "prof-1".to_string())));
    assert!(query.contains(&("search".to_string(), "garcia".to_string())));
    assert!(!query.iter().any(|(k, _)| k == "tipo_servicio_id"));
}

#[tokio::test]
async fn appointment_conflict_surfaces_backend_message() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();
    stack.wire.enqueue_err(clinic_client::ApiError::from_status(
        409,
        &envelopes::error_message("El profesional ya tiene una cita en ese horario"),
    ));

    let client = AppointmentsClient::new(stack.authorized.clone(), stack.config.clone());
    let draft = clinic_client::AppointmentDraft {
        paciente_id: Some("p-1".to_string()),
        fecha_inicio: Some("2026-09-01T09:00:00".to_string()),
        fecha_fin: Some("2026-09-01T09:30:00".to_string()),
        ..Default::default()
    };

    match client.create(&draft).await {
        Err(clinic_client::ApiError::Conflict { message }) => {
            assert_eq!(message, "El profesional ya tiene una cita en ese horario");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn appointment_cancel_returns_backend_message() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();
    stack
        .wire
        .enqueue_ok(200, json!({ "success": true, "message": "Cita cancelada" }));

    let client = AppointmentsClient::new(stack.authorized.clone(), stack.config.clone());
    let message = client.cancel(12).await.unwrap();

    assert_eq!(message.as_deref(), Some("Cita cancelada"));
    let sent = stack.wire.sent();
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].path, "/api/appointments/12");
}

#[tokio::test]
async fn calendar_view_hits_the_dedicated_endpoint() {
    let stack = test_stack();
    stack.store.set(ACCESS_TOKEN_COOKIE, "abc", 1).unwrap();
    stack
        .wire
        .enqueue_ok(200, json!({ "success": true, "data": [] }));

    let client = AppointmentsClient::new(stack.authorized.clone(), stack.config.clone());
    client
        .calendar(Some("2026-09-01"), Some("2026-09-07"), None)
        .await
        .unwrap();

    let sent = stack.wire.sent();
    assert_eq!(sent[0].path, "/api/appointments/calendar/view");
    assert_eq!(
        query_of(&sent[0]),
        vec![
            ("start".to_string(), "2026-09-01".to_string()),
            ("end".to_string(), "2026-09-07".to_string()),
        ]
    );
}
