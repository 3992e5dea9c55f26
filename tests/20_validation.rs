mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{request, send, test_app, token_for, USER};

// Every request here is rejected before a query is issued, so no database
// is needed.

#[tokio::test]
async fn consulta_requires_a_plausible_document() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    for uri in ["/consulta", "/consulta?documento=123", "/consulta?documento=1234567890123456"] {
        let (status, body) = send(&app, request(Method::GET, uri, Some(&token), None)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], true);
    }
    Ok(())
}

#[tokio::test]
async fn unknown_list_filters_are_rejected() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    let (status, body) = send(&app, request(Method::GET, "/reintegros?color=red", Some(&token), None)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown filter: color");
    Ok(())
}

#[tokio::test]
async fn page_limits_are_bounded() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    for uri in [
        "/reintegros?limit=0",
        "/informacion-personal?limit=101",
        "/suspension-especial?limit=ten",
    ] {
        let (status, _) = send(&app, request(Method::GET, uri, Some(&token), None)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn renewal_period_must_have_six_characters() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    let (status, _) = send(
        &app,
        request(Method::GET, "/renovaciones-extemporaneas?periodo=2024", Some(&token), None),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn reimbursement_date_range_is_validated() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    for uri in [
        "/reintegros/por-fecha",
        "/reintegros/por-fecha?fecha_desde=2024-01-01",
        "/reintegros/por-fecha?fecha_desde=01/01/2024&fecha_hasta=2024-02-01",
        "/reintegros/por-fecha?fecha_desde=2024-03-01&fecha_hasta=2024-02-01",
    ] {
        let (status, _) = send(&app, request(Method::GET, uri, Some(&token), None)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_and_server_managed_fields() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    for body in [
        json!({ "docconvfondo": "1-2-EPM", "color": "red" }),
        json!({ "docconvfondo": "1-2-EPM", "responsable_creacion": "otro" }),
    ] {
        let (status, _) = send(
            &app,
            request(Method::POST, "/estudiante-obtiene-grado", Some(&token), Some(body.clone())),
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
    }
    Ok(())
}

#[tokio::test]
async fn malformed_json_uses_the_error_envelope() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/informacion-personal")
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    Ok(())
}

#[tokio::test]
async fn numeric_keys_must_parse() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    let (status, body) = send(&app, request(Method::GET, "/ies-preg-posg/abc", Some(&token), None)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["id"], "Invalid key");
    Ok(())
}

#[tokio::test]
async fn habilitar_requires_a_numeric_document() -> Result<()> {
    let (app, state) = test_app().await;
    let token = token_for(&state, USER.0, None);

    let body = json!({ "documento": "abc" });
    let (status, _) = send(
        &app,
        request(Method::POST, "/renovaciones-extemporaneas/habilitar", Some(&token), Some(body)),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
