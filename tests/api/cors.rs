use crate::support::{start_seeded, CLIENT_ORIGIN};

#[tokio::test]
async fn client_origin_may_read_items() {
    let server = start_seeded().await;

    let resp = server
        .client
        .get(server.url("/items"))
        .header("Origin", CLIENT_ORIGIN)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        CLIENT_ORIGIN
    );
}

#[tokio::test]
async fn preflight_for_create_is_allowed() {
    let server = start_seeded().await;

    let resp = server
        .client
        .request(reqwest::Method::OPTIONS, server.url("/items"))
        .header("Origin", CLIENT_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], CLIENT_ORIGIN);
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("POST"));
    let allowed = headers["access-control-allow-headers"].to_str().unwrap();
    assert!(allowed.to_ascii_lowercase().contains("content-type"));
}

#[tokio::test]
async fn other_origins_are_not_echoed() {
    let server = start_seeded().await;

    let resp = server
        .client
        .get(server.url("/stats"))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let echoed = resp
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap().to_string());
    assert_ne!(echoed.as_deref(), Some("http://evil.example"));
}
