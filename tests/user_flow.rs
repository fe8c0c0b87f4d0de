use actix_web::{http::StatusCode, test};
use entity::user::StaffRole;

mod common;
use common::{
    client::{login_request, session_cookie, TestClient},
    test_data, TestContext,
};

#[actix_web::test]
async fn test_user_management_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let unit = client.create_unit("Centro").await;
    let admin_id = client
        .create_staff("admin@test.com", test_data::ADMIN_PASSWORD, StaffRole::Admin, None)
        .await;
    let resp = test::call_service(
        &app,
        login_request("admin@test.com", test_data::ADMIN_PASSWORD).to_request(),
    )
    .await;
    let admin = session_cookie(&resp);

    let new_user = serde_json::json!({
        "name": "New Coordinator",
        "email": "new@test.com",
        "password": "s3cret-pass",
        "role": "COORDINATOR",
        "unitId": unit.id,
    });
    let req = test::TestRequest::post()
        .uri("/users")
        .cookie(admin.clone())
        .set_json(&new_user)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    println!("[+] Created user: {}", created);
    assert!(created.get("passwordHash").is_none());
    assert_eq!(created["role"], "COORDINATOR");
    let user_id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/users")
        .cookie(admin.clone())
        .set_json(&new_user)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/users").cookie(admin.clone()).to_request();
    let users: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let listed = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == user_id)
        .expect("created user missing from list");
    assert_eq!(listed["unitName"], "Centro");

    // The new account can log in with the password it was given.
    let resp = test::call_service(&app, login_request("new@test.com", "s3cret-pass").to_request()).await;
    let coord = session_cookie(&resp);

    let req = test::TestRequest::get().uri("/users").cookie(coord).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/users/{user_id}"))
        .cookie(admin.clone())
        .set_json(serde_json::json!({ "role": "ADMIN", "unitId": null }))
        .to_request();
    let updated: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["role"], "ADMIN");
    assert!(updated["unitId"].is_null());

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{admin_id}"))
        .cookie(admin.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[+] Self delete: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{user_id}"))
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_bootstrap_admin_is_idempotent() {
    let ctx = TestContext::new().await;

    let hash = hour_bank::utils::password::hash_password("first").unwrap();
    let first = ctx.db.ensure_admin("root@test.com", "Root", hash).await.unwrap();
    let hash = hour_bank::utils::password::hash_password("second").unwrap();
    let second = ctx.db.ensure_admin("root@test.com", "Root", hash).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.role, StaffRole::Admin);
    assert!(hour_bank::utils::password::verify_password("second", &second.password_hash));
}
