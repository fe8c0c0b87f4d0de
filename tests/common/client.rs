use actix_web::{
    cookie::{Cookie, Key},
    dev::ServiceResponse,
    test, web, App,
};
use entity::{employee, role, unit, user::StaffRole};
use hour_bank::{
    db::postgres_service::PostgresService,
    types::{
        employee::DBEmployeeCreate,
        unit::RUnitCreate,
        user::DBUserCreate,
    },
    utils::{
        password::hash_password,
        session::{session_middleware, SESSION_COOKIE},
    },
};
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(session_middleware(Key::generate(), false))
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(hour_bank::routes::configure_routes)
    }

    pub async fn create_unit(&self, name: &str) -> unit::Model {
        self.db
            .create_unit(RUnitCreate {
                name: name.to_string(),
                address: None,
            })
            .await
            .expect("Failed to create unit")
    }

    pub async fn create_role(&self, name: &str) -> role::Model {
        self.db.create_role(name).await.expect("Failed to create role")
    }

    pub async fn create_employee(&self, name: &str, cpf: &str, role_id: i32, unit_id: i32) -> employee::Model {
        self.db
            .create_employee(DBEmployeeCreate {
                name: name.to_string(),
                cpf: cpf.to_string(),
                role_id,
                unit_id,
            })
            .await
            .expect("Failed to create employee")
    }

    pub async fn create_staff(
        &self,
        email: &str,
        password: &str,
        role: StaffRole,
        unit_id: Option<i32>,
    ) -> i32 {
        let password_hash = hash_password(password).expect("Failed to hash password");
        self.db
            .create_user(DBUserCreate {
                name: format!("Staff {email}"),
                email: email.to_string(),
                password_hash,
                role,
                unit_id,
            })
            .await
            .expect("Failed to create staff user")
            .id
    }
}

#[allow(dead_code)]
pub fn login_request(identifier: &str, secret: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "identifier": identifier, "secret": secret }))
}

/// Pulls the session cookie out of a successful login response.
#[allow(dead_code)]
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    assert!(resp.status().is_success(), "login failed with {}", resp.status());
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .expect("login did not set the session cookie")
        .into_owned()
}
