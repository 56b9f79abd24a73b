//! Persona listing endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn test_list_personas_in_registration_order() {
    let app = TestApp::new().await;

    let response = app
        .client
        .get(app.url("/api/personas"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body: Vec<serde_json::Value> = response.json().await.unwrap();
    let ids: Vec<&str> = body.iter().map(|p| p["id"].as_str().unwrap()).collect();
    let expected: Vec<&str> = companion::agents::all().iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(ids[0], companion::agents::default_persona().id);
}

#[tokio::test]
async fn test_persona_wire_format() {
    let app = TestApp::new().await;

    let response = app
        .client
        .get(app.url("/api/personas/strategist"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], "strategist");
    assert_eq!(body["tone"], "direct");
    assert!(body["gradient"].is_string());
    assert!(body["strengths"].as_array().unwrap().len() > 0);
    assert!(body.get("accent").is_none());
}

#[tokio::test]
async fn test_unknown_persona_is_404() {
    let app = TestApp::new().await;

    let response = app
        .client
        .get(app.url("/api/personas/ghost"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
