//! Health endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn test_public_health_returns_status_ok() {
    let app = TestApp::new().await;

    let response = app
        .client
        .get(app.url("/api/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_health_does_not_need_api_key() {
    let app = TestApp::new_with_options(crate::common::TestAppOptions {
        api_key: None,
        ..Default::default()
    })
    .await;

    let response = app
        .client
        .get(app.url("/api/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}
