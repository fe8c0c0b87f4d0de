use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

/// Public liveness check that also round-trips the database.
#[get("")]
pub async fn health(
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Response> {
    db.ping().await?;
    Ok(ApiResponse::Ok(Response { status: "ok".to_string() }))
}
