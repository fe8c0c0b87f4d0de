use hour_bank::db::postgres_service::PostgresService;
use std::sync::Arc;

pub mod client;

/// Fresh, fully migrated in-memory database per test.
pub struct TestContext {
    pub db: Arc<PostgresService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db = Arc::new(
            PostgresService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    pub const ADMIN_PASSWORD: &str = "admin-password";
    pub const COORD_PASSWORD: &str = "coordinator-password";
    pub const EMPLOYEE_CPF: &str = "12345678900";

    pub fn record_body(employee_id: i32, date: &str, start: &str, end: &str) -> serde_json::Value {
        serde_json::json!({
            "employeeId": employee_id,
            "date": date,
            "startTime": start,
            "endTime": end,
            "description": "shift",
        })
    }
}
