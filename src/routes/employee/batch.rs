use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::auth::{authorize, Action, Scope};
use crate::db::postgres_service::PostgresService;
use crate::types::employee::{BatchImportRes, RBatchImport};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;

/// Spreadsheet import. Rows are independent: a duplicate or malformed CPF
/// lands in `errors` and the rest of the batch still goes in.
#[post("/batch")]
pub async fn import(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<RBatchImport>,
) -> ApiResult<BatchImportRes> {
    authorize(&user, Action::ManageReference)?;
    if body.employees.is_empty() {
        return Err(AppError::BadRequest("No employees provided".into()));
    }
    if !Scope::for_user(&user)?.permits_unit(body.default_unit_id) {
        return Err(AppError::Forbidden);
    }

    let body = body.into_inner();
    let total = body.employees.len();
    let (count, errors) = db
        .import_employees(body.employees, body.default_unit_id, body.default_role_id)
        .await?;
    info!("batch import: {} of {} rows created", count, total);

    Ok(ApiResponse::Created(BatchImportRes {
        message: format!("Imported {count} employees"),
        count,
        errors,
    }))
}
