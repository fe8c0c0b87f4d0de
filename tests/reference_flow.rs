use actix_web::{http::StatusCode, test};
use entity::user::StaffRole;

mod common;
use common::{
    client::{login_request, session_cookie, TestClient},
    test_data::{self, record_body},
    TestContext,
};

#[actix_web::test]
async fn test_referenced_unit_and_role_cannot_be_deleted() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client
        .create_staff("admin@test.com", test_data::ADMIN_PASSWORD, StaffRole::Admin, None)
        .await;
    let resp = test::call_service(
        &app,
        login_request("admin@test.com", test_data::ADMIN_PASSWORD).to_request(),
    )
    .await;
    let admin = session_cookie(&resp);

    let req = test::TestRequest::post()
        .uri("/units")
        .cookie(admin.clone())
        .set_json(serde_json::json!({ "name": "Centro", "address": "Rua 1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let unit: serde_json::Value = test::read_body_json(resp).await;
    let unit_id = unit["id"].as_i64().unwrap() as i32;

    let req = test::TestRequest::post()
        .uri("/roles")
        .cookie(admin.clone())
        .set_json(serde_json::json!({ "name": "Nurse" }))
        .to_request();
    let role: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let role_id = role["id"].as_i64().unwrap() as i32;

    let req = test::TestRequest::post()
        .uri("/employees")
        .cookie(admin.clone())
        .set_json(serde_json::json!({
            "name": "Maria",
            "cpf": "123.456.789-00",
            "roleId": role_id,
            "unitId": unit_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let employee: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(employee["cpf"], "12345678900");

    for uri in [format!("/units/{unit_id}"), format!("/roles/{role_id}")] {
        let req = test::TestRequest::delete().uri(&uri).cookie(admin.clone()).to_request();
        let resp = test::call_service(&app, req).await;
        println!("[+] DELETE {uri}: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    // Still there.
    let req = test::TestRequest::get().uri("/units").cookie(admin.clone()).to_request();
    let units: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(units.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri("/units/4242")
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_employee_with_records_cannot_be_deleted() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let unit = client.create_unit("Centro").await;
    let role = client.create_role("Nurse").await;
    let busy = client.create_employee("Maria", "11111111111", role.id, unit.id).await;
    let idle = client.create_employee("Joao", "22222222222", role.id, unit.id).await;
    client
        .create_staff("admin@test.com", test_data::ADMIN_PASSWORD, StaffRole::Admin, None)
        .await;
    let resp = test::call_service(
        &app,
        login_request("admin@test.com", test_data::ADMIN_PASSWORD).to_request(),
    )
    .await;
    let admin = session_cookie(&resp);

    let req = test::TestRequest::post()
        .uri("/time-records")
        .cookie(admin.clone())
        .set_json(record_body(busy.id, "2024-04-01", "09:00", "12:00"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::delete()
        .uri(&format!("/employees/{}", busy.id))
        .cookie(admin.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::delete()
        .uri(&format!("/employees/{}", idle.id))
        .cookie(admin)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_batch_import_reports_bad_rows() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let unit = client.create_unit("Centro").await;
    let role = client.create_role("Nurse").await;
    client.create_employee("Existing", "33333333333", role.id, unit.id).await;
    client
        .create_staff("admin@test.com", test_data::ADMIN_PASSWORD, StaffRole::Admin, None)
        .await;
    let resp = test::call_service(
        &app,
        login_request("admin@test.com", test_data::ADMIN_PASSWORD).to_request(),
    )
    .await;
    let admin = session_cookie(&resp);

    let req = test::TestRequest::post()
        .uri("/employees/batch")
        .cookie(admin.clone())
        .set_json(serde_json::json!({
            "employees": [
                { "NOME": "Ana", "CPF": "111.111.111-11" },
                { "name": "Bruno", "cpf": "22222222222" },
                { "name": "Dup", "cpf": "33333333333" },
                { "name": "Short", "cpf": "123" },
            ],
            "defaultUnitId": unit.id,
            "defaultRoleId": role.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[+] Import result: {}", body);

    assert_eq!(body["count"], 2);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["name"], "Dup");
    assert_eq!(errors[0]["error"], "CPF already registered");
    assert_eq!(errors[1]["name"], "Short");

    let req = test::TestRequest::get().uri("/employees").cookie(admin.clone()).to_request();
    let employees: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(employees.as_array().unwrap().len(), 3);

    let req = test::TestRequest::post()
        .uri("/employees/batch")
        .cookie(admin)
        .set_json(serde_json::json!({
            "employees": [],
            "defaultUnitId": unit.id,
            "defaultRoleId": role.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_employees_cannot_manage_reference_data() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let unit = client.create_unit("Centro").await;
    let role = client.create_role("Nurse").await;
    client.create_employee("Maria", test_data::EMPLOYEE_CPF, role.id, unit.id).await;
    let resp = test::call_service(
        &app,
        login_request(test_data::EMPLOYEE_CPF, test_data::EMPLOYEE_CPF).to_request(),
    )
    .await;
    let worker = session_cookie(&resp);

    for uri in ["/units", "/roles", "/employees", "/users", "/time-records/summary"] {
        let req = test::TestRequest::get().uri(uri).cookie(worker.clone()).to_request();
        let resp = test::call_service(&app, req).await;
        println!("[+] GET {uri} as employee: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[actix_web::test]
async fn test_coordinator_manages_only_own_unit_employees() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let role = client.create_role("Nurse").await;
    let own_unit = client.create_unit("Centro").await;
    let other_unit = client.create_unit("Norte").await;
    let outside = client.create_employee("Joao", "22222222222", role.id, other_unit.id).await;
    client
        .create_staff("coord@test.com", test_data::COORD_PASSWORD, StaffRole::Coordinator, Some(own_unit.id))
        .await;
    let resp = test::call_service(
        &app,
        login_request("coord@test.com", test_data::COORD_PASSWORD).to_request(),
    )
    .await;
    let coord = session_cookie(&resp);

    let req = test::TestRequest::post()
        .uri("/employees")
        .cookie(coord.clone())
        .set_json(serde_json::json!({
            "name": "Ana",
            "cpf": "11111111111",
            "roleId": role.id,
            "unitId": other_unit.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[+] Create in other unit: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/employees")
        .cookie(coord.clone())
        .set_json(serde_json::json!({
            "name": "Ana",
            "cpf": "11111111111",
            "roleId": role.id,
            "unitId": own_unit.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let inside: serde_json::Value = test::read_body_json(resp).await;
    let inside_id = inside["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/employees/{inside_id}"))
        .cookie(coord.clone())
        .set_json(serde_json::json!({ "unitId": other_unit.id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[+] Move out of unit: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/employees/{inside_id}"))
        .cookie(coord.clone())
        .set_json(serde_json::json!({ "name": "Ana Maria" }))
        .to_request();
    let renamed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(renamed["name"], "Ana Maria");
    assert_eq!(renamed["unitId"], own_unit.id);

    let req = test::TestRequest::put()
        .uri(&format!("/employees/{}", outside.id))
        .cookie(coord.clone())
        .set_json(serde_json::json!({ "name": "Renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/employees/{}", outside.id))
        .cookie(coord.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/employees/batch")
        .cookie(coord.clone())
        .set_json(serde_json::json!({
            "employees": [{ "name": "Bruno", "cpf": "33333333333" }],
            "defaultUnitId": other_unit.id,
            "defaultRoleId": role.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get().uri("/employees").cookie(coord).to_request();
    let employees: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let employees = employees.as_array().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["id"], inside_id);

    // Nothing reached the other unit.
    let outside_now = ctx.db.get_employee(outside.id).await.unwrap();
    assert_eq!(outside_now.name, "Joao");
}
