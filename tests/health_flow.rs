use actix_web::{http::StatusCode, test};

mod common;
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn test_health_is_public() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[+] Health status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
